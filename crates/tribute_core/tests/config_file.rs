use std::path::Path;

use tribute_core::scenario::demo_tribute;
use tribute_core::{TotalDrain, TributeConfig};

fn demo_config() -> TributeConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/donny.toml");
    TributeConfig::from_path(&path).unwrap()
}

#[test]
fn shipped_demo_config_matches_builtin_scenario() {
    let cfg = demo_config();
    assert_eq!(cfg.trace_filter(), Some("tribute_core=info"));
    let tribute = cfg.into_tribute().unwrap();
    assert_eq!(tribute, demo_tribute());
    assert_eq!(tribute.total_drain(), TotalDrain::Coupled);
}
