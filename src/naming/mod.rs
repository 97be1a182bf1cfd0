//! Asset naming conventions for AGR deliverables.
//!
//! Every generator is a pure function of the project snapshot (and, for the
//! low-poly FBX and archive names, a district code). Building models are
//! listed in project order; the Ground model always contributes its own fixed
//! entries at the end.

#[cfg(feature = "desktop")]
pub mod commands;
pub mod district;

use serde::Serialize;

use crate::projects::Project;

/// District token used when no district has been chosen.
pub const DISTRICT_PLACEHOLDER: &str = "XXXX";

/// Low-poly texture channel letters: diffuse, roughness, metallic, normal, opacity.
const LOW_POLY_CHANNELS: [&str; 5] = ["d", "r", "m", "n", "o"];

struct Naming<'a> {
    addr: &'a str,
    models: Vec<&'a str>,
    needs_suffix: bool,
}

impl<'a> Naming<'a> {
    fn of(project: &'a Project) -> Self {
        Self {
            addr: &project.name,
            models: project.building_models().map(|m| m.name.as_str()).collect(),
            needs_suffix: project.needs_model_suffix(),
        }
    }

    fn suffix(&self, model: &str) -> String {
        if self.needs_suffix {
            format!("_{}", model)
        } else {
            String::new()
        }
    }

    /// `<addr><suffix>` for every building model.
    fn prefixes(&self) -> Vec<String> {
        self.models
            .iter()
            .map(|m| format!("{}{}", self.addr, self.suffix(m)))
            .collect()
    }
}

fn district_token(district_code: Option<&str>) -> &str {
    match district_code {
        Some(code) if !code.is_empty() => code,
        _ => DISTRICT_PLACEHOLDER,
    }
}

pub fn geometry_high_poly(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let mut result = Vec::new();
    for prefix in n.prefixes() {
        result.push(format!("SM_{}_Main", prefix));
        result.push(format!("SM_{}_MainGlass", prefix));
    }
    result.push(format!("SM_{}_Ground", n.addr));
    result.push(format!("SM_{}_GroundGlass", n.addr));
    result
}

/// Low-poly geometry always carries the model name.
pub fn geometry_low_poly(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let mut result = Vec::new();
    for model in &n.models {
        result.push(format!("SM_{}_{}_Main", n.addr, model));
        result.push(format!("SM_{}_{}_MainGlass", n.addr, model));
    }
    result.push(format!("SM_{}_Ground", n.addr));
    result.push(format!("SM_{}_GroundGlass", n.addr));
    result.push(format!("SM_{}_GroundEl", n.addr));
    result.push(format!("SM_{}_Flora", n.addr));
    result
}

pub fn materials_high_poly(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let mut result = Vec::new();
    for prefix in n.prefixes() {
        result.push(format!("M_{}_Main_1", prefix));
        result.push(format!("M_{}_MainGlass_1", prefix));
    }
    result.push(format!("M_{}_Ground_1", n.addr));
    result.push(format!("M_{}_GroundGlass_1", n.addr));
    result
}

/// Low-poly buildings share a single glass material, `M_Glass_01`.
pub fn materials_low_poly(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let mut result: Vec<String> = n
        .models
        .iter()
        .map(|m| format!("M_{}_{}_Main_1", n.addr, m))
        .collect();
    result.push("M_Glass_01".to_string());
    result.push(format!("M_{}_Ground_1", n.addr));
    result.push(format!("M_{}_GroundGlass_1", n.addr));
    result.push(format!("M_{}_GroundEl_1", n.addr));
    result.push(format!("M_{}_Flora_1", n.addr));
    result
}

pub fn textures_high_poly(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let mut result = Vec::new();
    for prefix in n.prefixes() {
        result.push(format!("T_{}_Diffuse_1.1001", prefix));
        result.push(format!("T_{}_ERM_1.1001", prefix));
        result.push(format!("T_{}_Normal_1.1001", prefix));
    }
    result
}

pub fn textures_low_poly(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let mut result = Vec::new();
    for prefix in n.prefixes() {
        for channel in LOW_POLY_CHANNELS {
            result.push(format!("T_{}_Main_{}_1", prefix, channel));
        }
    }
    for channel in LOW_POLY_CHANNELS {
        result.push(format!("T_{}_Ground_{}_1", n.addr, channel));
    }
    result.push(format!("T_{}_GroundEl_d_1", n.addr));
    result.push(format!("T_{}_GroundEl_o_1", n.addr));
    result.push(format!("T_{}_Flora_d_1", n.addr));
    result.push(format!("T_{}_Flora_o_1", n.addr));
    result
}

pub fn collisions(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let mut result: Vec<String> = n
        .prefixes()
        .into_iter()
        .map(|prefix| format!("UCX_SM_{}_Main_001", prefix))
        .collect();
    result.push(format!("UCX_SM_{}_Ground_001", n.addr));
    result
}

pub fn lighting(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let mut result = Vec::new();
    for prefix in n.prefixes() {
        result.push(format!("{}_Root", prefix));
        result.push(format!("{}_Omni_001", prefix));
        result.push(format!("{}_Spot_001", prefix));
    }
    result.push(format!("{}_Ground_Root", n.addr));
    result.push(format!("{}_Ground_Omni_001", n.addr));
    result.push(format!("{}_Ground_Spot_001", n.addr));
    result
}

/// Model FBX names followed by their light-rig FBX names.
pub fn fbx_high_poly(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let prefixes = n.prefixes();
    let mut result: Vec<String> = prefixes.iter().map(|p| format!("SM_{}", p)).collect();
    result.push(format!("SM_{}_Ground", n.addr));
    result.extend(prefixes.iter().map(|p| format!("SM_{}_Light", p)));
    result.push(format!("SM_{}_Ground_Light", n.addr));
    result
}

/// Buildings are numbered 01, 02, ... in project order regardless of their names.
pub fn fbx_low_poly(project: &Project, district_code: Option<&str>) -> Vec<String> {
    let n = Naming::of(project);
    let district = district_token(district_code);
    let mut result: Vec<String> = (1..=n.models.len())
        .map(|index| format!("{}_{}_{:02}", district, n.addr, index))
        .collect();
    result.push(format!("{}_{}_Ground", district, n.addr));
    result
}

pub fn archives_high_poly(project: &Project) -> Vec<String> {
    let n = Naming::of(project);
    let mut result: Vec<String> = n.prefixes().iter().map(|p| format!("SM_{}", p)).collect();
    result.push(format!("SM_{}_Ground", n.addr));
    result
}

pub fn archive_low_poly(project: &Project, district_code: Option<&str>) -> Vec<String> {
    vec![format!("{}_{}", district_token(district_code), project.name)]
}

/// Every naming list for one project, using its stored district code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSheet {
    pub geometry_high_poly: Vec<String>,
    pub geometry_low_poly: Vec<String>,
    pub materials_high_poly: Vec<String>,
    pub materials_low_poly: Vec<String>,
    pub textures_high_poly: Vec<String>,
    pub textures_low_poly: Vec<String>,
    pub collisions: Vec<String>,
    pub lighting: Vec<String>,
    pub fbx_high_poly: Vec<String>,
    pub fbx_low_poly: Vec<String>,
    pub archives_high_poly: Vec<String>,
    pub archive_low_poly: Vec<String>,
}

impl NameSheet {
    pub fn for_project(project: &Project) -> Self {
        let district = project.district();
        Self {
            geometry_high_poly: geometry_high_poly(project),
            geometry_low_poly: geometry_low_poly(project),
            materials_high_poly: materials_high_poly(project),
            materials_low_poly: materials_low_poly(project),
            textures_high_poly: textures_high_poly(project),
            textures_low_poly: textures_low_poly(project),
            collisions: collisions(project),
            lighting: lighting(project),
            fbx_high_poly: fbx_high_poly(project),
            fbx_low_poly: fbx_low_poly(project, district),
            archives_high_poly: archives_high_poly(project),
            archive_low_poly: archive_low_poly(project, district),
        }
    }

    /// Section titles paired with their lists, in display order.
    pub fn sections(&self) -> Vec<(&'static str, &[String])> {
        vec![
            ("Geometry (high poly)", self.geometry_high_poly.as_slice()),
            ("Geometry (low poly)", self.geometry_low_poly.as_slice()),
            ("Materials (high poly)", self.materials_high_poly.as_slice()),
            ("Materials (low poly)", self.materials_low_poly.as_slice()),
            ("Textures (high poly)", self.textures_high_poly.as_slice()),
            ("Textures (low poly)", self.textures_low_poly.as_slice()),
            ("Collisions", self.collisions.as_slice()),
            ("Lighting", self.lighting.as_slice()),
            ("FBX (high poly)", self.fbx_high_poly.as_slice()),
            ("FBX (low poly)", self.fbx_low_poly.as_slice()),
            ("Archives (high poly)", self.archives_high_poly.as_slice()),
            ("Archive (low poly)", self.archive_low_poly.as_slice()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tower() -> Project {
        Project::new("Tower")
    }

    fn tower_with_two_buildings() -> Project {
        let mut project = tower();
        project.add_model();
        project
    }

    #[test]
    fn single_building_has_no_infix() {
        let project = tower();
        assert_eq!(
            geometry_high_poly(&project),
            vec![
                "SM_Tower_Main",
                "SM_Tower_MainGlass",
                "SM_Tower_Ground",
                "SM_Tower_GroundGlass"
            ]
        );
        assert_eq!(
            textures_high_poly(&project),
            vec![
                "T_Tower_Diffuse_1.1001",
                "T_Tower_ERM_1.1001",
                "T_Tower_Normal_1.1001"
            ]
        );
    }

    #[test]
    fn several_buildings_get_model_infix() {
        let project = tower_with_two_buildings();
        let names = geometry_high_poly(&project);
        assert_eq!(
            names,
            vec![
                "SM_Tower_001_Main",
                "SM_Tower_001_MainGlass",
                "SM_Tower_002_Main",
                "SM_Tower_002_MainGlass",
                "SM_Tower_Ground",
                "SM_Tower_GroundGlass"
            ]
        );
        for model in ["001", "002"] {
            let infix = format!("_{}_", model);
            assert_eq!(
                materials_high_poly(&project).iter().filter(|n| n.contains(&infix)).count(),
                2
            );
        }
    }

    #[test]
    fn low_poly_geometry_always_names_model() {
        let project = tower();
        assert_eq!(
            geometry_low_poly(&project),
            vec![
                "SM_Tower_001_Main",
                "SM_Tower_001_MainGlass",
                "SM_Tower_Ground",
                "SM_Tower_GroundGlass",
                "SM_Tower_GroundEl",
                "SM_Tower_Flora"
            ]
        );
    }

    #[test]
    fn low_poly_materials_share_glass() {
        let project = tower_with_two_buildings();
        assert_eq!(
            materials_low_poly(&project),
            vec![
                "M_Tower_001_Main_1",
                "M_Tower_002_Main_1",
                "M_Glass_01",
                "M_Tower_Ground_1",
                "M_Tower_GroundGlass_1",
                "M_Tower_GroundEl_1",
                "M_Tower_Flora_1"
            ]
        );
    }

    #[test]
    fn low_poly_textures_cover_channels() {
        let project = tower();
        let names = textures_low_poly(&project);
        assert_eq!(names.len(), 5 + 5 + 4);
        assert_eq!(names[0], "T_Tower_Main_d_1");
        assert_eq!(names[4], "T_Tower_Main_o_1");
        assert_eq!(names[5], "T_Tower_Ground_d_1");
        assert_eq!(names[13], "T_Tower_Flora_o_1");
    }

    #[test]
    fn fbx_low_poly_uses_placeholder_without_district() {
        let project = tower_with_two_buildings();
        let names = fbx_low_poly(&project, None);
        assert_eq!(names, vec!["XXXX_Tower_01", "XXXX_Tower_02", "XXXX_Tower_Ground"]);
        assert_eq!(fbx_low_poly(&project, Some("")), names);
        assert!(names.iter().all(|n| n.starts_with("XXXX_")));
    }

    #[test]
    fn fbx_low_poly_numbers_ignore_model_names() {
        let mut project = tower_with_two_buildings();
        project.models[0].name = "North".to_string();
        project.models[1].name = "South".to_string();
        assert_eq!(
            fbx_low_poly(&project, Some("0815")),
            vec!["0815_Tower_01", "0815_Tower_02", "0815_Tower_Ground"]
        );
        assert_eq!(archive_low_poly(&project, Some("0815")), vec!["0815_Tower"]);
        assert_eq!(archive_low_poly(&project, None), vec!["XXXX_Tower"]);
    }

    #[test]
    fn fbx_high_poly_lists_models_then_lights() {
        let project = tower_with_two_buildings();
        assert_eq!(
            fbx_high_poly(&project),
            vec![
                "SM_Tower_001",
                "SM_Tower_002",
                "SM_Tower_Ground",
                "SM_Tower_001_Light",
                "SM_Tower_002_Light",
                "SM_Tower_Ground_Light"
            ]
        );
    }

    #[test]
    fn collisions_and_lighting() {
        let project = tower();
        assert_eq!(
            collisions(&project),
            vec!["UCX_SM_Tower_Main_001", "UCX_SM_Tower_Ground_001"]
        );
        assert_eq!(
            lighting(&project),
            vec![
                "Tower_Root",
                "Tower_Omni_001",
                "Tower_Spot_001",
                "Tower_Ground_Root",
                "Tower_Ground_Omni_001",
                "Tower_Ground_Spot_001"
            ]
        );
    }

    #[test]
    fn sheet_uses_project_district() {
        let mut project = tower();
        project.district_code = "1234".to_string();
        let sheet = NameSheet::for_project(&project);
        assert_eq!(sheet.fbx_low_poly, vec!["1234_Tower_01", "1234_Tower_Ground"]);
        assert_eq!(sheet.archive_low_poly, vec!["1234_Tower"]);
        assert_eq!(sheet.archives_high_poly, vec!["SM_Tower", "SM_Tower_Ground"]);
        assert_eq!(sheet.sections().len(), 12);
    }
}
