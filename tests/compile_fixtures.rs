use clipforge::{
    GifSettings, ImageToVideoSettings, ReverseSettings, compile_gif, compile_image_to_video,
    compile_reverse, validate_gif, validate_image_to_video, validate_reverse,
};

#[test]
fn gif_fixture_validates_and_compiles_to_known_segment() {
    let settings: GifSettings =
        serde_json::from_str(include_str!("data/gif_settings.json")).unwrap();
    assert!(validate_gif(&settings).is_empty());
    assert_eq!(
        compile_gif(&settings),
        "w_800,h_450,fps_15,so_0,du_5,colors_128,e_dither,lossy_20,fl_loop,f_gif"
    );
}

#[test]
fn reverse_fixture_validates_and_compiles() {
    let settings: ReverseSettings =
        serde_json::from_str(include_str!("data/reverse_settings.json")).unwrap();
    assert!(validate_reverse(&settings).is_empty());
    assert_eq!(
        compile_reverse(&settings),
        "e_reverse,e_acceleration:200,ac_none,fl_loop,e_dissolve:1500"
    );
}

#[test]
fn image_to_video_fixture_full_pipeline() {
    let settings: ImageToVideoSettings =
        serde_json::from_str(include_str!("data/image_to_video_settings.json")).unwrap();
    assert!(validate_image_to_video(&settings).is_empty());
    assert_eq!(
        compile_image_to_video(&settings),
        concat!(
            "e_zoompan:left,e_zoom:100-130,du_4,fps_24",
            "/e_brightness:5,e_saturation:15,e_art:vintage,e_vignette:25",
            "/e_volume:80,fl_loop_audio",
            "/l_text:south:Summer_Trip,so_0.5,eo_3.5",
            "/w_1280,h_720,ar_16:9,q_90,f_mp4"
        )
    );
}

#[test]
fn fixture_compilation_is_deterministic() {
    let settings: GifSettings =
        serde_json::from_str(include_str!("data/gif_settings.json")).unwrap();
    assert_eq!(compile_gif(&settings), compile_gif(&settings));
}

#[test]
fn delivery_url_for_compiled_fixture() {
    let settings: GifSettings =
        serde_json::from_str(include_str!("data/gif_settings.json")).unwrap();
    let base = clipforge::delivery_base("demo", "video", "abc123.gif");
    let url = clipforge::assemble(&base, &compile_gif(&settings)).unwrap();
    assert_eq!(
        url,
        "https://res.mediacloud.com/demo/video/upload/\
         w_800,h_450,fps_15,so_0,du_5,colors_128,e_dither,lossy_20,fl_loop,f_gif/abc123.gif"
    );
}
