use magcurate_lib::services::config::AppPaths;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub struct TestContext {
    // Held so the directory outlives the test.
    pub _dir: TempDir,
    pub paths: AppPaths,
}

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn init_test_workspace() -> TestContext {
    init_test_logger();
    let dir = TempDir::new().expect("temp dir should be created");
    let paths = AppPaths::under(dir.path());
    paths.ensure_dirs().expect("app dirs should be created");
    TestContext { _dir: dir, paths }
}
