use tribute_regression::{demo_status_lines, demo_trace};

#[test]
fn demo_volley_trace() {
    let trace = demo_trace().unwrap();
    insta::assert_json_snapshot!("demo_volley", trace);
}

#[test]
fn demo_status_lines_match_golden() {
    let lines = demo_status_lines().unwrap();
    assert_eq!(
        lines,
        [
            "head hitpoints: 56",
            "total hitpoints: 136",
            "larm hitpoints: 45",
            "total hitpoints: 118",
            "rarm hitpoints: 45",
            "total hitpoints: 100",
            "lleg hitpoints: 61",
            "total hitpoints: 82",
            "torso hitpoints: 74",
            "total hitpoints: 64",
        ]
    );
}
