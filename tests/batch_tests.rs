use glyphforge::atlas::UvRect;
use glyphforge::batch::QuadBatch;
use glyphforge::color::Rgba;
use glyphforge::utils::Rectangle;

const UV: UvRect = UvRect {
    u0: 0.25,
    v0: 0.5,
    u1: 0.75,
    v1: 1.0,
};

#[test]
fn each_quad_contributes_six_vertices() {
    let mut batch = QuadBatch::new();
    batch.begin(800.0, 600.0);
    for i in 0..7 {
        batch.push_quad(
            Rectangle::new(i as f32 * 40.0, 0.0, 32.0, 32.0),
            UV,
            Rgba::WHITE,
        );
    }
    assert_eq!(batch.quad_count(), 7);
    assert_eq!(batch.vertex_count(), 42);
}

#[test]
fn begin_clears_the_previous_frame() {
    let mut batch = QuadBatch::new();
    batch.begin(800.0, 600.0);
    batch.push_quad(Rectangle::new(0.0, 0.0, 16.0, 16.0), UV, Rgba::WHITE);
    assert_eq!(batch.quad_count(), 1);

    batch.begin(1024.0, 768.0);
    assert_eq!(batch.quad_count(), 0, "begin must drop stale vertices");
    assert_eq!(batch.resolution(), [1024.0, 768.0]);
}

#[test]
fn quad_corners_map_rect_to_uv() {
    let mut batch = QuadBatch::new();
    batch.begin(800.0, 600.0);
    let tint = Rgba::new(0.2, 0.4, 0.6, 0.8);
    batch.push_quad(Rectangle::new(10.0, 20.0, 30.0, 40.0), UV, tint);

    let v = batch.vertices();
    // Triangle one: top-left, top-right, bottom-left.
    assert_eq!(v[0].position, [10.0, 20.0]);
    assert_eq!(v[0].uv, [UV.u0, UV.v0]);
    assert_eq!(v[1].position, [40.0, 20.0]);
    assert_eq!(v[1].uv, [UV.u1, UV.v0]);
    assert_eq!(v[2].position, [10.0, 60.0]);
    assert_eq!(v[2].uv, [UV.u0, UV.v1]);
    // Triangle two closes at the bottom-right corner.
    assert_eq!(v[5].position, [40.0, 60.0]);
    assert_eq!(v[5].uv, [UV.u1, UV.v1]);
    for vertex in v {
        assert_eq!(vertex.tint, [0.2, 0.4, 0.6, 0.8]);
    }
}

#[test]
fn call_order_is_preserved_for_painter_compositing() {
    let mut batch = QuadBatch::new();
    batch.begin(100.0, 100.0);
    batch.push_quad(Rectangle::new(0.0, 0.0, 10.0, 10.0), UV, Rgba::BLACK);
    batch.push_quad(Rectangle::new(5.0, 5.0, 10.0, 10.0), UV, Rgba::WHITE);

    let v = batch.vertices();
    assert_eq!(v[0].position, [0.0, 0.0]);
    assert_eq!(v[6].position, [5.0, 5.0], "later quads must come later in the buffer");
}
