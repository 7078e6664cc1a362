use ruler_core::*;

fn interior_emphasis(geometry: &RulerGeometry) -> Vec<Emphasis> {
    geometry
        .interior_ticks()
        .iter()
        .map(|tick| tick.emphasis)
        .collect()
}

#[test]
fn test_counts_for_all_small_rulers() {
    for max_cm in 0..=25 {
        for show_fives in [false, true] {
            let geometry = build_geometry(max_cm, 4, show_fives).unwrap();

            assert_eq!(geometry.ticks.len() as i64, max_cm * 10 + 1);
            assert_eq!(geometry.interior_ticks().len() as i64, max_cm * 10);
            assert_eq!(geometry.labels.len() as i64, max_cm + 1);

            // Exactly one terminal tick and label, both at the end
            let terminal_ticks = geometry
                .ticks
                .iter()
                .filter(|t| t.emphasis == Emphasis::Terminal)
                .count();
            assert_eq!(terminal_ticks, 1);
            assert_eq!(geometry.ticks.last().unwrap().emphasis, Emphasis::Terminal);
            assert_eq!(geometry.labels.iter().filter(|l| l.terminal).count(), 1);
            assert!(geometry.labels.last().unwrap().terminal);
        }
    }
}

#[test]
fn test_one_tick_per_millimeter() {
    let geometry = build_geometry(7, 2, true).unwrap();
    for (index, tick) in geometry.ticks.iter().enumerate() {
        assert_eq!(tick.position_mm as usize, index);
    }
    assert_eq!(geometry.ticks.last().unwrap().position_mm, 70);
}

#[test]
fn test_emphasis_without_fives() {
    let geometry = build_geometry(4, 1, false).unwrap();
    for tick in geometry.interior_ticks() {
        let expected = if tick.position_mm % 10 == 0 {
            Emphasis::Full
        } else {
            Emphasis::Half
        };
        assert_eq!(tick.emphasis, expected, "position {}", tick.position_mm);
    }
}

#[test]
fn test_emphasis_with_fives() {
    let geometry = build_geometry(4, 1, true).unwrap();
    for tick in geometry.interior_ticks() {
        let expected = if tick.position_mm % 5 != 0 {
            Emphasis::Half
        } else if tick.position_mm % 10 == 0 {
            Emphasis::Full
        } else {
            Emphasis::ThreeQuarter
        };
        assert_eq!(tick.emphasis, expected, "position {}", tick.position_mm);
    }
}

#[test]
fn test_two_cm_without_fives() {
    let geometry = build_geometry(2, 5, false).unwrap();

    assert_eq!(geometry.interior_ticks().len(), 20);
    for (position, emphasis) in interior_emphasis(&geometry).into_iter().enumerate() {
        if position == 0 || position == 10 {
            assert_eq!(emphasis, Emphasis::Full);
        } else {
            assert_eq!(emphasis, Emphasis::Half);
        }
    }

    let values: Vec<u32> = geometry.labels.iter().map(|l| l.value).collect();
    assert_eq!(values, vec![0, 1, 2]);
    assert!(!geometry.labels[0].terminal);
    assert!(!geometry.labels[1].terminal);
    assert!(geometry.labels[2].terminal);
}

#[test]
fn test_one_cm_with_fives() {
    let geometry = build_geometry(1, 3, true).unwrap();

    use Emphasis::*;
    assert_eq!(
        interior_emphasis(&geometry),
        vec![Full, Half, Half, Half, Half, ThreeQuarter, Half, Half, Half, Half]
    );

    let values: Vec<u32> = geometry.labels.iter().map(|l| l.value).collect();
    assert_eq!(values, vec![0, 1]);
}

#[test]
fn test_zero_length_ruler() {
    let geometry = build_geometry(0, 5, true).unwrap();

    assert!(geometry.interior_ticks().is_empty());
    assert_eq!(
        geometry.ticks,
        vec![TickMark {
            position_mm: 0,
            emphasis: Emphasis::Terminal,
        }]
    );
    assert_eq!(geometry.labels.len(), 1);
    assert_eq!(geometry.labels[0].value, 0);
    assert!(geometry.labels[0].terminal);
}

#[test]
fn test_scale_does_not_change_geometry() {
    let unscaled = build_geometry(3, 0, true).unwrap();
    let scaled = build_geometry(3, 12, true).unwrap();
    assert_eq!(unscaled, scaled);
}

#[test]
fn test_geometry_is_deterministic() {
    let first = build_geometry(13, 4, false).unwrap();
    let second = build_geometry(13, 4, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_width_hint_follows_digit_count() {
    let short = build_geometry(9, 1, false).unwrap();
    assert!(short.labels.iter().all(|l| l.width_hint == 10));

    let long = build_geometry(100, 1, false).unwrap();
    assert!(long.labels.iter().all(|l| l.width_hint == 30));
}

#[test]
fn test_negative_inputs_rejected() {
    match build_geometry(-1, 5, false) {
        Err(RulerError::InvalidArgument(msg)) => assert!(msg.contains("negative")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
    assert!(matches!(
        build_geometry(5, -1, true),
        Err(RulerError::InvalidArgument(_))
    ));
}

#[test]
fn test_oversized_inputs_rejected() {
    assert!(matches!(
        build_geometry(constants::MAX_CM + 1, 1, false),
        Err(RulerError::InvalidArgument(_))
    ));
    assert!(matches!(
        build_geometry(1, constants::MAX_PIXEL_SCALE + 1, false),
        Err(RulerError::InvalidArgument(_))
    ));
    assert!(build_geometry(1, constants::MAX_PIXEL_SCALE, false).is_ok());
}

#[test]
fn test_emphasis_attributes() {
    assert_eq!(Emphasis::Full.cap_fraction(), 1.0);
    assert_eq!(Emphasis::ThreeQuarter.cap_fraction(), 0.75);
    assert_eq!(Emphasis::Half.cap_fraction(), 0.5);
    assert_eq!(Emphasis::Terminal.cap_fraction(), 1.0);

    assert!(Emphasis::Full.has_side_line());
    assert!(Emphasis::Half.has_side_line());
    assert!(!Emphasis::Terminal.has_side_line());
}

#[test]
fn test_digit_count() {
    assert_eq!(constants::digit_count(0), 1);
    assert_eq!(constants::digit_count(9), 1);
    assert_eq!(constants::digit_count(10), 2);
    assert_eq!(constants::digit_count(100_000), 6);
}
