use media_toolcheck::fixtures::{file_digest, image_dimensions};
use media_toolcheck::{
    command_exists, skip_unless_tool_available, FixtureColor, ImageSize, TestHelper, ToolError,
};
use tempfile::TempDir;

fn random_name() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{:032x}", nanos ^ ((std::process::id() as u128) << 64))
}

#[test]
fn unknown_tool_is_not_found_but_unavailable() {
    let helper = TestHelper::default();
    let err = helper.get_tool("no-such-tool").unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
    assert!(!helper.tool_available("no-such-tool"));
}

#[test]
fn every_known_tool_answers_availability() {
    let helper = TestHelper::default();
    let tools = helper.available_tools();
    assert_eq!(tools.len(), 5);
    for (name, available) in tools.iter() {
        assert_eq!(helper.tool_available(name), available);
    }
}

#[test]
fn random_command_does_not_exist() {
    assert!(!command_exists(&random_name()));
    assert!(!TestHelper::default().command_exists(&random_name()));
}

#[test]
fn default_size_copies_blue_fixture() {
    let helper = TestHelper::default();
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("blue.png");

    helper
        .create_test_image(&dest, "100x100".parse().unwrap(), FixtureColor::Blue)
        .unwrap();

    let fixture = helper.fixtures().fixture_path(FixtureColor::Blue);
    assert_eq!(std::fs::read(&dest).unwrap(), std::fs::read(&fixture).unwrap());
}

#[test]
fn resized_red_fixture_has_exact_dimensions() {
    skip_unless_tool_available!("imagemagick");

    let helper = TestHelper::default();
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("red-50.png");

    helper
        .create_test_image(&dest, ImageSize::new(50, 50), FixtureColor::Red)
        .unwrap();

    assert_eq!(image_dimensions(&dest).unwrap(), (50, 50));
    let fixture = helper.fixtures().fixture_path(FixtureColor::Red);
    assert_ne!(file_digest(&dest).unwrap(), file_digest(&fixture).unwrap());
}

#[test]
fn resize_ignores_aspect_ratio() {
    skip_unless_tool_available!("imagemagick");

    let helper = TestHelper::default();
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("wide.png");

    helper
        .create_test_image(&dest, ImageSize::new(120, 30), FixtureColor::Blue)
        .unwrap();

    assert_eq!(image_dimensions(&dest).unwrap(), (120, 30));
}

#[test]
fn failed_resize_surfaces_command_error() {
    skip_unless_tool_available!("imagemagick");

    let temp_dir = TempDir::new().unwrap();
    let bogus = temp_dir.path().join("fixtures");
    std::fs::create_dir(&bogus).unwrap();
    std::fs::write(bogus.join("red.png"), b"not an image").unwrap();

    let helper = TestHelper::new(media_toolcheck::Config {
        fixtures_dir: bogus,
        ..Default::default()
    });
    let err = helper
        .create_test_image(&temp_dir.path().join("out.png"), ImageSize::new(10, 10), FixtureColor::Red)
        .unwrap_err();

    match err {
        ToolError::CommandFailed { command, stderr } => {
            assert!(command.contains("-resize 10x10!"));
            assert!(!stderr.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn temp_dirs_are_unique_and_kept() {
    let helper = TestHelper::default();
    let dir = helper.create_temp_dir("helper-tests-").unwrap();
    let other = helper.create_temp_dir("helper-tests-").unwrap();
    assert!(dir.is_dir());
    assert_ne!(dir, other);
    std::fs::remove_dir_all(dir).unwrap();
    std::fs::remove_dir_all(other).unwrap();
}
