use axum::body::Body;
use base64::Engine as _;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use placard_canvas::ResolvedFontConfig;
use placard_server::{router, LabelPolicy, Renderer};
use rstest::rstest;
use std::sync::Arc;
use tower::ServiceExt;

struct Decoded {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Decoded {
    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.rgba[idx],
            self.rgba[idx + 1],
            self.rgba[idx + 2],
            self.rgba[idx + 3],
        ]
    }
}

fn fixture_app() -> axum::Router {
    let fonts = ResolvedFontConfig::from_font_data(
        include_bytes!("../../placard-canvas/tests/fonts/DejaVuSans.ttf").to_vec(),
    )
    .unwrap();
    router(Renderer::new(Arc::new(fonts)).with_label_policy(LabelPolicy::Strict))
}

fn no_font_app() -> axum::Router {
    router(Renderer::new(Arc::new(ResolvedFontConfig::empty())))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

fn decode(body: &str) -> Decoded {
    let png_data = base64::engine::general_purpose::STANDARD
        .decode(body)
        .expect("body is standard padded base64");
    let decoder = png::Decoder::new(std::io::Cursor::new(png_data));
    let mut reader = decoder.read_info().expect("body decodes to a PNG");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!(info.color_type, png::ColorType::Rgba);
    buf.truncate(info.buffer_size());
    Decoded {
        width: info.width,
        height: info.height,
        rgba: buf,
    }
}

#[tokio::test]
async fn test_generate_defaults() {
    let (status, content_type, body) = get(no_font_app(), "/generate").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));

    let image = decode(&body);
    assert_eq!((image.width, image.height), (200, 200));
    assert_eq!(image.pixel(0, 0), [128, 128, 128, 255]);
    assert_eq!(image.pixel(100, 100), [128, 128, 128, 255]);
}

#[rstest]
#[case("/generate?size=100*50", (100, 50))]
#[case("/generate?size=1*1", (1, 1))]
#[case("/generate?size=640*480&color=white", (640, 480))]
#[case("/generate?size=100", (200, 200))]
#[case("/generate?size=100*50*2", (200, 200))]
#[case("/generate?size=abc*50", (200, 200))]
#[case("/generate?size=100*abc", (200, 200))]
#[case("/generate?size=", (200, 200))]
#[case("/generate?size=0*0", (200, 200))]
#[case("/generate?size=8192*1", (8192, 1))]
#[case("/generate?size=9000*10", (200, 200))]
#[tokio::test]
async fn test_generate_dimensions(#[case] uri: &str, #[case] expected: (u32, u32)) {
    let (status, _, body) = get(no_font_app(), uri).await;
    assert_eq!(status, StatusCode::OK);
    let image = decode(&body);
    assert_eq!((image.width, image.height), expected);
}

#[rstest]
#[case("grey", [128, 128, 128, 255])]
#[case("blue", [0, 0, 255, 255])]
#[case("green", [0, 128, 0, 255])]
#[case("white", [255, 255, 255, 255])]
#[case("black", [0, 0, 0, 255])]
#[case("purple", [128, 128, 128, 255])]
#[case("BLUE", [128, 128, 128, 255])]
#[tokio::test]
async fn test_generate_colors(#[case] color: &str, #[case] expected: [u8; 4]) {
    let uri = format!("/generate?size=20*20&color={color}");
    let (_, _, body) = get(no_font_app(), &uri).await;
    let image = decode(&body);
    assert_eq!(image.pixel(10, 10), expected);
}

#[tokio::test]
async fn test_round_zero_has_no_transparent_pixels() {
    let (_, _, body) = get(no_font_app(), "/generate?size=60*40&round=0&color=blue").await;
    let image = decode(&body);
    assert!(image.rgba.chunks_exact(4).all(|p| p == [0, 0, 255, 255]));
}

#[rstest]
#[case("-5", "0")]
#[case("150", "100")]
#[case("junk", "0")]
#[tokio::test]
async fn test_round_is_clamped(#[case] given: &str, #[case] clamped: &str) {
    let (_, _, given_body) = get(
        no_font_app(),
        &format!("/generate?size=80*60&color=green&round={given}"),
    )
    .await;
    let (_, _, clamped_body) = get(
        no_font_app(),
        &format!("/generate?size=80*60&color=green&round={clamped}"),
    )
    .await;
    assert_eq!(given_body, clamped_body);
}

#[tokio::test]
async fn test_rounded_corners_are_transparent() {
    let (_, _, body) = get(no_font_app(), "/generate?size=100*50&round=50&color=blue").await;
    let image = decode(&body);
    assert_eq!((image.width, image.height), (100, 50));

    // radius = ((100 + 50) / 4) * 50 / 100 = 18
    for (x, y) in [(0, 0), (99, 0), (0, 49), (99, 49), (3, 3)] {
        assert_eq!(image.pixel(x, y)[3], 0, "pixel ({x}, {y})");
    }
    for (x, y) in [(18, 0), (0, 18), (50, 25), (81, 49)] {
        assert_eq!(image.pixel(x, y), [0, 0, 255, 255], "pixel ({x}, {y})");
    }
}

#[tokio::test]
async fn test_identical_queries_are_byte_identical() {
    let uri = "/generate?size=120*90&round=30&color=white";
    let (_, _, first) = get(no_font_app(), uri).await;
    let (_, _, second) = get(no_font_app(), uri).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_repeated_keys_use_first_value() {
    let (_, _, body) = get(no_font_app(), "/generate?size=30*10&size=50*50&color=black").await;
    let image = decode(&body);
    assert_eq!((image.width, image.height), (30, 10));
    assert_eq!(image.pixel(15, 5), [0, 0, 0, 255]);
}

#[tokio::test]
async fn test_strict_label_policy_without_font_is_server_error() {
    let renderer =
        Renderer::new(Arc::new(ResolvedFontConfig::empty())).with_label_policy(LabelPolicy::Strict);
    let (status, _, body) = get(router(renderer), "/generate").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "failed to generate image");
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get(no_font_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

/// Bounding box `(min_x, max_x, min_y, max_y)` of opaque pixels that differ from `background`.
fn ink_bounds(image: &Decoded, background: [u8; 4]) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..image.height {
        for x in 0..image.width {
            let p = image.pixel(x, y);
            if p[3] != 255 || p == background {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }
    }
    bounds
}

#[tokio::test]
async fn test_label_is_drawn_in_black_and_centered() {
    let (status, _, body) = get(fixture_app(), "/generate?size=400*200&round=50&color=blue").await;
    assert_eq!(status, StatusCode::OK);
    let image = decode(&body);
    assert_eq!((image.width, image.height), (400, 200));

    // Background outside the label, transparent corners
    assert_eq!(image.pixel(200, 10), [0, 0, 255, 255]);
    assert_eq!(image.pixel(0, 0)[3], 0);

    // Black over blue only ever lowers the blue channel
    let dark = image
        .rgba
        .chunks_exact(4)
        .filter(|p| p[3] == 255 && p[0] == 0 && p[1] == 0 && p[2] < 40)
        .count();
    assert!(dark > 0, "no label ink found");

    let (min_x, max_x, min_y, max_y) =
        ink_bounds(&image, [0, 0, 255, 255]).expect("no label ink found");
    let left = min_x as i32;
    let right = 399 - max_x as i32;
    assert!((left - right).abs() <= 4, "label off center: {left} vs {right}");

    // Baseline on the vertical midpoint, glyphs above it
    assert!((98..=101).contains(&max_y), "ink ends at row {max_y}");
    assert!(min_y >= 80, "ink starts at row {min_y}");
}

#[tokio::test]
async fn test_small_blue_placeholder_with_label() {
    let (status, content_type, body) =
        get(fixture_app(), "/generate?size=100*50&round=50&color=blue").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    let image = decode(&body);
    assert_eq!((image.width, image.height), (100, 50));

    // radius 18 corners
    for (x, y) in [(0, 0), (99, 0), (0, 49), (99, 49)] {
        assert_eq!(image.pixel(x, y)[3], 0, "pixel ({x}, {y})");
    }
    for (x, y) in [(50, 5), (50, 45), (10, 25), (90, 25)] {
        assert_eq!(image.pixel(x, y), [0, 0, 255, 255], "pixel ({x}, {y})");
    }

    // A 5 px label is mostly anti-aliased edges, still clearly darker than the fill
    let inked: Vec<[u8; 4]> = image
        .rgba
        .chunks_exact(4)
        .map(|p| [p[0], p[1], p[2], p[3]])
        .filter(|p| p[3] == 255 && *p != [0, 0, 255, 255])
        .collect();
    assert!(!inked.is_empty(), "no label ink found");
    assert!(inked.iter().all(|p| p[0] == 0 && p[1] == 0));
    assert!(inked.iter().any(|p| p[2] < 160));

    let (min_x, max_x, _, max_y) = ink_bounds(&image, [0, 0, 255, 255]).unwrap();
    assert!((23..=26).contains(&max_y), "ink ends at row {max_y}");
    let left = min_x as i32;
    let right = 99 - max_x as i32;
    assert!((left - right).abs() <= 3, "label off center: {left} vs {right}");
}
