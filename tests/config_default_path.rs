//! 기본 경로(config.toml) 로드/저장 테스트. 작업 디렉터리를 바꾸므로 파일을 분리한다.
use deposit_returns_calculator::config::{load_or_default, Config, DEFAULT_CONFIG_PATH};
use deposit_returns_calculator::valuation::CompoundingFrequency;

#[test]
fn default_path_load_and_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::env::set_current_dir(dir.path()).expect("chdir");

    let cfg = load_or_default().expect("load");
    assert_eq!(cfg, Config::default());
    assert!(dir.path().join(DEFAULT_CONFIG_PATH).exists());

    let mut changed = cfg.clone();
    changed.default_frequency = Some(CompoundingFrequency::Quarterly);
    changed.save().expect("save");
    assert_eq!(load_or_default().expect("reload"), changed);
}
