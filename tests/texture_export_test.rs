use agr_tools_lib::broadcast::{self, BroadcastMessage};
use agr_tools_lib::projects::TextureSlot;
use agr_tools_lib::texture_export;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[tokio::test]
async fn missing_sources_are_skipped_and_not_counted() {
    let tmp = TempDir::new().unwrap();
    let sources = tmp.path().join("sources");
    let output = tmp.path().join("out");

    let mut project = common::project_with_buildings("Tower", 1);
    let diffuse = common::write_texture(&sources, "wall_d.png");
    let normal = common::write_texture(&sources, "wall_n.png");
    common::set_texture(&mut project, 0, 1001, TextureSlot::Diffuse, &diffuse);
    common::set_texture(&mut project, 0, 1001, TextureSlot::Erm, &sources.join("gone.png"));
    common::set_texture(&mut project, 0, 1002, TextureSlot::Normal, &normal);

    let mut updates = broadcast::subscribe();
    let count = texture_export::export_model(&project, 0, &output).await.unwrap();

    assert_eq!(count, 2);
    assert!(output.join("T_Tower_Diffuse_1.1001.png").is_file());
    assert!(output.join("T_Tower_Normal_1.1002.png").is_file());
    assert!(!output.join("T_Tower_ERM_1.1001.png").exists());

    let expected = BroadcastMessage::TextureExportFinished(project.id, Some("001".to_string()), 2);
    assert_eq!(
        texture_export::take_finished(&mut updates, project.id, Some("001")),
        Some(expected)
    );
    assert_eq!(texture_export::take_finished(&mut updates, project.id, Some("001")), None);
}

#[tokio::test]
async fn failed_export_leaves_no_finish_message() {
    let tmp = TempDir::new().unwrap();
    let first = common::project_with_buildings("Tower", 1);
    let second = common::project_with_buildings("Tower", 1);

    let mut updates = broadcast::subscribe();
    assert!(texture_export::export_model(&first, 7, tmp.path()).await.is_err());
    texture_export::export_model(&second, 0, tmp.path()).await.unwrap();

    assert_eq!(texture_export::take_finished(&mut updates, first.id, Some("001")), None);

    let mut updates = broadcast::subscribe();
    texture_export::export_model(&second, 0, tmp.path()).await.unwrap();
    assert_eq!(
        texture_export::take_finished(&mut updates, second.id, Some("001")),
        Some(BroadcastMessage::TextureExportFinished(second.id, Some("001".to_string()), 0))
    );
}

#[tokio::test]
async fn ground_and_multi_building_names_include_the_model() {
    let tmp = TempDir::new().unwrap();
    let sources = tmp.path().join("sources");
    let output = tmp.path().join("out");

    let mut project = common::project_with_buildings("Block 5", 2);
    let texture = common::write_texture(&sources, "t.png");
    common::set_texture(&mut project, 1, 1003, TextureSlot::Erm, &texture);
    common::set_texture(&mut project, 2, 1001, TextureSlot::Diffuse, &texture);

    assert_eq!(texture_export::export_model(&project, 1, &output).await.unwrap(), 1);
    assert!(output.join("T_Block_5_002_ERM_1.1003.png").is_file());

    assert_eq!(texture_export::export_model(&project, 2, &output).await.unwrap(), 1);
    assert!(output.join("T_Block_5_Ground_Diffuse_1.1001.png").is_file());

    assert!(texture_export::export_model(&project, 7, &output).await.is_err());
}

#[tokio::test]
async fn export_all_writes_one_folder_per_model() {
    let tmp = TempDir::new().unwrap();
    let sources = tmp.path().join("sources");
    let output = tmp.path().join("out");

    let mut project = common::project_with_buildings("Tower", 1);
    let texture = common::write_texture(&sources, "t.png");
    common::set_texture(&mut project, 0, 1001, TextureSlot::Diffuse, &texture);
    common::set_texture(&mut project, 1, 1010, TextureSlot::Normal, &texture);

    let count = texture_export::export_all_models(&project, &output).await.unwrap();

    assert_eq!(count, 2);
    assert!(output.join("001/T_Tower_Diffuse_1.1001.png").is_file());
    assert!(output.join("Ground/T_Tower_Ground_Normal_1.1010.png").is_file());
}

#[tokio::test]
async fn exported_file_is_a_byte_copy() {
    let tmp = TempDir::new().unwrap();
    let mut project = common::project_with_buildings("Tower", 1);
    let texture = common::write_texture(&tmp.path().join("src"), "d.png");
    common::set_texture(&mut project, 0, 1001, TextureSlot::Diffuse, &texture);

    let output = tmp.path().join("out");
    texture_export::export_model(&project, 0, &output).await.unwrap();

    let original = std::fs::read(&texture).unwrap();
    let copied = std::fs::read(output.join("T_Tower_Diffuse_1.1001.png")).unwrap();
    assert_eq!(original, copied);
}
