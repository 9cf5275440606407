use cssforge_fluid::{
    calculate_space_scale, calculate_type_scale, SpaceScaleConfig, TypeScaleConfig,
};
use pretty_assertions::assert_eq;

fn type_config(positive: u32, negative: u32) -> TypeScaleConfig {
    serde_json::from_value(serde_json::json!({
        "minWidth": 320,
        "minFontSize": 14,
        "minTypeScale": 1.25,
        "maxWidth": 1435,
        "maxFontSize": 16,
        "maxTypeScale": 1.25,
        "positiveSteps": positive,
        "negativeSteps": negative,
    }))
    .expect("type config")
}

#[test]
fn type_scale_runs_from_largest_to_smallest() {
    let steps = calculate_type_scale(&type_config(5, 3)).expect("scale");
    let labels: Vec<&str> = steps.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["4xl", "3xl", "2xl", "xl", "l", "m", "s", "xs", "2xs"]);

    let xl = steps.iter().find(|s| s.label == "xl").expect("xl step");
    assert_eq!(xl.step, 2);
    assert_eq!(xl.clamp, "clamp(1.3672rem, 1.3111rem + 0.2803vw, 1.5625rem)");
    assert_eq!(xl.min_font_size, 21.875);
    assert_eq!(xl.max_font_size, 25.0);
}

#[test]
fn type_scale_without_steps_has_only_base() {
    let steps = calculate_type_scale(&type_config(0, 0)).expect("scale");
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].label, "m");
    assert_eq!(steps[0].clamp, "clamp(0.875rem, 0.8391rem + 0.1794vw, 1rem)");
}

#[test]
fn space_scale_emits_sizes_custom_pairs_then_one_up_pairs() {
    let config: SpaceScaleConfig = serde_json::from_value(serde_json::json!({
        "minSize": 4,
        "maxSize": 24,
        "minWidth": 320,
        "maxWidth": 1280,
        "negativeSteps": [0],
        "positiveSteps": [1, 2],
        "customSizes": ["xs-l", "s-9xl"],
    }))
    .expect("space config");

    let scale = calculate_space_scale(&config).expect("scale");
    let rendered: Vec<(String, String)> = scale
        .iter()
        .map(|s| (s.label.clone(), s.clamp.clone()))
        .collect();

    let expected = [
        ("xs", "clamp(0rem, 0rem + 0vw, 0rem)"),
        ("s", "clamp(0.25rem, -0.1667rem + 2.0833vw, 1.5rem)"),
        ("m", "clamp(0.25rem, -0.1667rem + 2.0833vw, 1.5rem)"),
        ("l", "clamp(0.5rem, -0.3333rem + 4.1667vw, 3rem)"),
        ("xs-l", "clamp(0rem, -1rem + 5vw, 3rem)"),
        ("xs-s", "clamp(0rem, -0.5rem + 2.5vw, 1.5rem)"),
        ("s-m", "clamp(0.25rem, -0.1667rem + 2.0833vw, 1.5rem)"),
        ("m-l", "clamp(0.25rem, -0.6667rem + 4.5833vw, 3rem)"),
    ]
    .map(|(l, c)| (l.to_string(), c.to_string()));

    assert_eq!(rendered, expected);
}

#[test]
fn space_scale_orders_negative_multipliers_smallest_first() {
    let config: SpaceScaleConfig = serde_json::from_value(serde_json::json!({
        "minSize": 16,
        "maxSize": 20,
        "minWidth": 320,
        "maxWidth": 1240,
        "negativeSteps": [0.5, 0.75, 0.25],
        "positiveSteps": [2, 1.5],
    }))
    .expect("space config");

    let scale = calculate_space_scale(&config).expect("scale");
    let labels: Vec<&str> = scale.sizes.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["3xs", "2xs", "xs", "s", "m", "l"]);

    let sizes: Vec<(f64, f64)> = scale.sizes.iter().map(|s| (s.min_size, s.max_size)).collect();
    assert_eq!(
        sizes,
        [(4.0, 5.0), (8.0, 10.0), (12.0, 15.0), (16.0, 20.0), (24.0, 30.0), (32.0, 40.0)]
    );
}
