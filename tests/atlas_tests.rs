use glyphforge::atlas::{AtlasLayout, ATLAS_COLUMNS, MIN_TILE, PREFERRED_TILE};
use glyphforge::icons::ICON_IDS;

#[test]
fn layout_uses_preferred_tile_when_the_device_allows() {
    let layout = AtlasLayout::compute(ICON_IDS.len(), 4096);
    assert_eq!(layout.columns, ATLAS_COLUMNS);
    assert_eq!(layout.tile, PREFERRED_TILE);
    assert_eq!(layout.rows, (ICON_IDS.len() as u32).div_ceil(ATLAS_COLUMNS));
    assert_eq!(layout.width, layout.columns * layout.tile);
    assert_eq!(layout.height, layout.rows * layout.tile);
}

#[test]
fn layout_never_shrinks_below_the_fidelity_floor() {
    let layout = AtlasLayout::compute(ICON_IDS.len(), 600);
    assert_eq!(layout.tile, MIN_TILE, "tile size must not drop below the floor");
}

#[test]
fn layout_shrinks_tiles_between_floor_and_preferred() {
    // 12 columns at 1320px leave room for 110px tiles, inside the clamp.
    let layout = AtlasLayout::compute(12, 1320);
    assert_eq!(layout.rows, 1);
    assert_eq!(layout.tile, 110);
}

#[test]
fn every_icon_gets_a_normalized_uv_rect() {
    let layout = AtlasLayout::compute(ICON_IDS.len(), 4096);
    for index in 0..ICON_IDS.len() {
        let uv = layout.uv(index);
        assert!(0.0 <= uv.u0 && uv.u0 < uv.u1 && uv.u1 <= 1.0, "bad u range at {index}");
        assert!(0.0 <= uv.v0 && uv.v0 < uv.v1 && uv.v1 <= 1.0, "bad v range at {index}");
    }
}

#[test]
fn tiles_never_overlap() {
    let layout = AtlasLayout::compute(ICON_IDS.len(), 4096);
    let origins: Vec<_> = (0..ICON_IDS.len()).map(|i| layout.tile_origin(i)).collect();
    for (i, a) in origins.iter().enumerate() {
        assert!(a.0 + layout.tile <= layout.width);
        assert!(a.1 + layout.tile <= layout.height);
        for b in &origins[i + 1..] {
            let disjoint_x = a.0 + layout.tile <= b.0 || b.0 + layout.tile <= a.0;
            let disjoint_y = a.1 + layout.tile <= b.1 || b.1 + layout.tile <= a.1;
            assert!(disjoint_x || disjoint_y, "tiles at {a:?} and {b:?} overlap");
        }
    }
}

#[test]
fn enumeration_order_fills_rows_left_to_right() {
    let layout = AtlasLayout::compute(ICON_IDS.len(), 4096);
    assert_eq!(layout.tile_origin(0), (0, 0));
    assert_eq!(layout.tile_origin(1), (layout.tile, 0));
    assert_eq!(
        layout.tile_origin(ATLAS_COLUMNS as usize),
        (0, layout.tile),
        "column overflow should wrap to the next row"
    );
}
