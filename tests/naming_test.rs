use agr_tools_lib::naming::{self, NameSheet};

#[path = "common/mod.rs"]
mod common;

fn render(sheet: &NameSheet) -> String {
    let mut lines = Vec::new();
    for (title, names) in sheet.sections() {
        lines.push(title.to_string());
        lines.extend(names.iter().map(|name| format!("  {}", name)));
    }
    lines.join("\n")
}

#[test]
fn name_sheet_for_two_buildings() {
    let mut project = common::project_with_buildings("Park", 2);
    project.district_code = "0401".to_string();

    insta::assert_snapshot!(render(&NameSheet::for_project(&project)), @r###"
    Geometry (high poly)
      SM_Park_001_Main
      SM_Park_001_MainGlass
      SM_Park_002_Main
      SM_Park_002_MainGlass
      SM_Park_Ground
      SM_Park_GroundGlass
    Geometry (low poly)
      SM_Park_001_Main
      SM_Park_001_MainGlass
      SM_Park_002_Main
      SM_Park_002_MainGlass
      SM_Park_Ground
      SM_Park_GroundGlass
      SM_Park_GroundEl
      SM_Park_Flora
    Materials (high poly)
      M_Park_001_Main_1
      M_Park_001_MainGlass_1
      M_Park_002_Main_1
      M_Park_002_MainGlass_1
      M_Park_Ground_1
      M_Park_GroundGlass_1
    Materials (low poly)
      M_Park_001_Main_1
      M_Park_002_Main_1
      M_Glass_01
      M_Park_Ground_1
      M_Park_GroundGlass_1
      M_Park_GroundEl_1
      M_Park_Flora_1
    Textures (high poly)
      T_Park_001_Diffuse_1.1001
      T_Park_001_ERM_1.1001
      T_Park_001_Normal_1.1001
      T_Park_002_Diffuse_1.1001
      T_Park_002_ERM_1.1001
      T_Park_002_Normal_1.1001
    Textures (low poly)
      T_Park_001_Main_d_1
      T_Park_001_Main_r_1
      T_Park_001_Main_m_1
      T_Park_001_Main_n_1
      T_Park_001_Main_o_1
      T_Park_002_Main_d_1
      T_Park_002_Main_r_1
      T_Park_002_Main_m_1
      T_Park_002_Main_n_1
      T_Park_002_Main_o_1
      T_Park_Ground_d_1
      T_Park_Ground_r_1
      T_Park_Ground_m_1
      T_Park_Ground_n_1
      T_Park_Ground_o_1
      T_Park_GroundEl_d_1
      T_Park_GroundEl_o_1
      T_Park_Flora_d_1
      T_Park_Flora_o_1
    Collisions
      UCX_SM_Park_001_Main_001
      UCX_SM_Park_002_Main_001
      UCX_SM_Park_Ground_001
    Lighting
      Park_001_Root
      Park_001_Omni_001
      Park_001_Spot_001
      Park_002_Root
      Park_002_Omni_001
      Park_002_Spot_001
      Park_Ground_Root
      Park_Ground_Omni_001
      Park_Ground_Spot_001
    FBX (high poly)
      SM_Park_001
      SM_Park_002
      SM_Park_Ground
      SM_Park_001_Light
      SM_Park_002_Light
      SM_Park_Ground_Light
    FBX (low poly)
      0401_Park_01
      0401_Park_02
      0401_Park_Ground
    Archives (high poly)
      SM_Park_001
      SM_Park_002
      SM_Park_Ground
    Archive (low poly)
      0401_Park
    "###);
}

#[test]
fn single_building_names_skip_the_model() {
    let project = common::project_with_buildings("Tower", 1);
    let sheet = NameSheet::for_project(&project);

    assert_eq!(sheet.fbx_high_poly, vec!["SM_Tower", "SM_Tower_Ground", "SM_Tower_Light", "SM_Tower_Ground_Light"]);
    assert_eq!(sheet.geometry_low_poly[0], "SM_Tower_001_Main");
    assert_eq!(sheet.fbx_low_poly, vec!["XXXX_Tower_01", "XXXX_Tower_Ground"]);
    assert_eq!(sheet.archive_low_poly, vec!["XXXX_Tower"]);
}

#[test]
fn low_poly_fbx_numbers_buildings_in_order() {
    let mut project = common::project_with_buildings("Yard", 3);
    project.rename_model(1, "Annex").unwrap();

    assert_eq!(
        naming::fbx_low_poly(&project, Some("1203")),
        vec!["1203_Yard_01", "1203_Yard_02", "1203_Yard_03", "1203_Yard_Ground"]
    );
    assert_eq!(naming::fbx_low_poly(&project, Some(""))[0], "XXXX_Yard_01");
    assert_eq!(naming::collisions(&project)[1], "UCX_SM_Yard_Annex_Main_001");
}

#[test]
fn name_sheet_serializes_camel_case() {
    let project = common::project_with_buildings("Tower", 1);
    let json = serde_json::to_value(NameSheet::for_project(&project)).unwrap();
    assert_eq!(json["geometryHighPoly"][0], "SM_Tower_Main");
    assert_eq!(json["archiveLowPoly"][0], "XXXX_Tower");
}
