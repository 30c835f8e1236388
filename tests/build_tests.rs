use kumu::core::interfaces::AssemblyService;
use kumu::core::models::{BuildMode, ProjectPaths};
use kumu::core::services::KumuAssemblyService;
use kumu::infrastructure::TokioFileSystemService;
use std::path::Path;
use std::sync::Arc;

const TEMPLATE: &str = "<html>\n<head>\n<title>demo</title>\n</head>\n<body>\n<!-- internal note -->\n<h1>Demo</h1>\n</body>\n</html>";

fn write_project(root: &Path) {
    let ejs = root.join("src/ejs");
    std::fs::create_dir_all(ejs.join("news")).unwrap();
    std::fs::write(ejs.join("index.ejs"), TEMPLATE).unwrap();
    std::fs::write(ejs.join("_partial.ejs"), "<p>partial</p>").unwrap();
    std::fs::write(ejs.join("news/archive.ejs"), TEMPLATE).unwrap();

    let images = root.join("src/images");
    std::fs::create_dir_all(&images).unwrap();
    std::fs::write(images.join("logo.png"), b"png-bytes").unwrap();
}

fn service_for(root: &Path) -> KumuAssemblyService {
    let paths = ProjectPaths {
        root: root.to_path_buf(),
        ..Default::default()
    };
    KumuAssemblyService::new(Arc::new(TokioFileSystemService), paths)
}

#[tokio::test]
async fn test_development_build_writes_pages_and_assets() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_project(temp_dir.path());

    let service = service_for(temp_dir.path());
    let result = service.build(BuildMode::Development).await.unwrap();

    assert!(result.success);
    assert_eq!(result.pages_emitted, 2);

    let out = temp_dir.path().join("public");
    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("<script src=\"assets/javascript/bundle.js\"></script>"));
    assert!(index.contains("<link rel=\"stylesheet\" href=\"assets/stylesheet/bundle.css\">"));
    // Development keeps the template untouched otherwise
    assert!(index.contains("<!-- internal note -->"));

    assert!(out.join("news/archive.html").exists());
    assert!(out.join("assets/images/logo.png").exists());
}

#[tokio::test]
async fn test_production_build_minifies_and_hash_qualifies() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_project(temp_dir.path());

    let service = service_for(temp_dir.path());
    let result = service.build(BuildMode::Production).await.unwrap();

    assert!(result.success);

    let out = temp_dir.path().join("public");
    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(!index.contains("internal note"));
    assert!(!index.contains(">\n<"));
    assert!(index.contains("assets/javascript/bundle.[contenthash].js"));
    assert!(index.contains("assets/stylesheet/bundle.[contenthash].css"));
}

#[tokio::test]
async fn test_nested_pages_reference_assets_relatively() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_project(temp_dir.path());

    let service = service_for(temp_dir.path());
    service.build(BuildMode::Development).await.unwrap();

    let archive = std::fs::read_to_string(
        temp_dir.path().join("public/news/archive.html"),
    )
    .unwrap();
    assert!(archive.contains("src=\"../assets/javascript/bundle.js\""));
    assert!(archive.contains("href=\"../assets/stylesheet/bundle.css\""));
}

#[tokio::test]
async fn test_build_cleans_stale_bundle_directories() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_project(temp_dir.path());

    let out = temp_dir.path().join("public");
    std::fs::create_dir_all(out.join("assets/javascript")).unwrap();
    std::fs::create_dir_all(out.join("assets/stylesheet")).unwrap();
    std::fs::write(out.join("assets/javascript/bundle.old.js"), "stale").unwrap();
    std::fs::write(out.join("assets/stylesheet/bundle.old.css"), "stale").unwrap();

    let service = service_for(temp_dir.path());
    service.build(BuildMode::Production).await.unwrap();

    assert!(!out.join("assets/javascript/bundle.old.js").exists());
    assert!(!out.join("assets/stylesheet/bundle.old.css").exists());
    // Cleaning targets only the bundle subtrees, pages are regenerated
    assert!(out.join("index.html").exists());
}

#[tokio::test]
async fn test_build_without_templates_succeeds_with_no_pages() {
    let temp_dir = tempfile::tempdir().unwrap();

    let service = service_for(temp_dir.path());
    let result = service.build(BuildMode::Development).await.unwrap();

    assert!(result.success);
    assert_eq!(result.pages_emitted, 0);
    assert!(temp_dir.path().join("public").is_dir());
}

#[tokio::test]
async fn test_partials_are_not_emitted() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_project(temp_dir.path());

    let service = service_for(temp_dir.path());
    service.build(BuildMode::Development).await.unwrap();

    assert!(!temp_dir.path().join("public/_partial.html").exists());
}
