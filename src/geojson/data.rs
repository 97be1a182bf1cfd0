use serde::{Deserialize, Serialize};

use super::document::sanitize_value;
use super::glass::GlassMaterial;
use crate::error::{AgrError, Result};

/// `FNO_name` forced on the Ground model.
pub const LANDSCAPING_FNO_NAME: &str = "Благоустройство территории";

/// Metadata of one model as exported to a GeoJSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoJsonData {
    pub address: String,
    pub okrug: String,
    pub rajon: String,
    pub name: String,
    pub developer: String,
    pub designer: String,
    pub cad_num: String,
    pub fno_code: String,
    pub fno_name: String,
    pub zu_area: String,
    pub h_relief: String,
    pub h_otn: String,
    pub h_abs: String,
    pub s_obsh: String,
    pub s_naz: String,
    pub s_podz: String,
    pub spp_gns: String,
    pub act_agr: String,
    pub other: String,
    pub coord_x: String,
    pub coord_y: String,
    /// JPEG thumbnail, base64 encoded.
    pub image_base64: Option<String>,
    pub glasses: Vec<GlassMaterial>,
}

impl GeoJsonData {
    pub fn for_ground() -> Self {
        Self {
            fno_name: LANDSCAPING_FNO_NAME.to_string(),
            ..Self::default()
        }
    }

    /// Document property keys paired with their values, in file order (without `imageBase64`).
    pub fn properties(&self) -> [(&'static str, &str); 19] {
        [
            ("address", self.address.as_str()),
            ("okrug", self.okrug.as_str()),
            ("rajon", self.rajon.as_str()),
            ("name", self.name.as_str()),
            ("developer", self.developer.as_str()),
            ("designer", self.designer.as_str()),
            ("cadNum", self.cad_num.as_str()),
            ("FNO_code", self.fno_code.as_str()),
            ("FNO_name", self.fno_name.as_str()),
            ("ZU_area", self.zu_area.as_str()),
            ("h_relief", self.h_relief.as_str()),
            ("h_otn", self.h_otn.as_str()),
            ("h_abs", self.h_abs.as_str()),
            ("s_obsh", self.s_obsh.as_str()),
            ("s_naz", self.s_naz.as_str()),
            ("s_podz", self.s_podz.as_str()),
            ("spp_gns", self.spp_gns.as_str()),
            ("act_AGR", self.act_agr.as_str()),
            ("other", self.other.as_str()),
        ]
    }

    pub fn property_mut(&mut self, key: &str) -> Option<&mut String> {
        let field = match key {
            "address" => &mut self.address,
            "okrug" => &mut self.okrug,
            "rajon" => &mut self.rajon,
            "name" => &mut self.name,
            "developer" => &mut self.developer,
            "designer" => &mut self.designer,
            "cadNum" => &mut self.cad_num,
            "FNO_code" => &mut self.fno_code,
            "FNO_name" => &mut self.fno_name,
            "ZU_area" => &mut self.zu_area,
            "h_relief" => &mut self.h_relief,
            "h_otn" => &mut self.h_otn,
            "h_abs" => &mut self.h_abs,
            "s_obsh" => &mut self.s_obsh,
            "s_naz" => &mut self.s_naz,
            "s_podz" => &mut self.s_podz,
            "spp_gns" => &mut self.spp_gns,
            "act_AGR" => &mut self.act_agr,
            "other" => &mut self.other,
            _ => return None,
        };
        Some(field)
    }

    /// Copies the fields shared by all models of a project.
    ///
    /// Coordinates, glasses and the thumbnail stay per model. Ground gets the
    /// landscaping label and no building heights or areas.
    pub fn copy_common_fields_from(&mut self, source: &GeoJsonData, is_ground: bool) {
        self.address = source.address.clone();
        self.okrug = source.okrug.clone();
        self.rajon = source.rajon.clone();
        self.name = source.name.clone();
        self.developer = source.developer.clone();
        self.designer = source.designer.clone();
        self.cad_num = source.cad_num.clone();
        self.fno_code = source.fno_code.clone();
        self.zu_area = source.zu_area.clone();
        self.h_relief = source.h_relief.clone();
        self.act_agr = source.act_agr.clone();
        self.other = source.other.clone();

        if is_ground {
            self.fno_name = LANDSCAPING_FNO_NAME.to_string();
            self.h_otn.clear();
            self.h_abs.clear();
            self.s_obsh.clear();
            self.s_naz.clear();
            self.s_podz.clear();
            self.spp_gns.clear();
        } else {
            self.fno_name = source.fno_name.clone();
            self.h_otn = source.h_otn.clone();
            self.h_abs = source.h_abs.clone();
            self.s_obsh = source.s_obsh.clone();
            self.s_naz = source.s_naz.clone();
            self.s_podz = source.s_podz.clone();
            self.spp_gns = source.spp_gns.clone();
        }
    }

    /// Fails when another material (other than the one at `skip`) would be written under the same key.
    fn check_glass_name(&self, name: &str, skip: Option<usize>) -> Result<()> {
        let key = sanitize_value(name);
        let taken = self
            .glasses
            .iter()
            .enumerate()
            .any(|(i, glass)| Some(i) != skip && sanitize_value(&glass.name) == key);
        if taken {
            return Err(AgrError::DuplicateGlassName(name.to_string()));
        }
        Ok(())
    }

    /// Checks that every glass material has its own name.
    pub fn validate_glasses(&self) -> Result<()> {
        for (index, glass) in self.glasses.iter().enumerate() {
            self.check_glass_name(&glass.name, Some(index))?;
        }
        Ok(())
    }

    pub fn add_glass(&mut self, material: GlassMaterial) -> Result<()> {
        self.check_glass_name(&material.name, None)?;
        self.glasses.push(material);
        Ok(())
    }

    pub fn update_glass(&mut self, index: usize, material: GlassMaterial) -> Result<()> {
        let count = self.glasses.len();
        if index >= count {
            return Err(AgrError::GlassIndexOutOfRange { index, count });
        }
        self.check_glass_name(&material.name, Some(index))?;
        self.glasses[index] = material;
        Ok(())
    }

    /// Removes the glass at `index`, or the last one when no index is given.
    pub fn remove_glass(&mut self, index: Option<usize>) -> Result<GlassMaterial> {
        let count = self.glasses.len();
        let index = match index {
            Some(index) => index,
            None if count > 0 => count - 1,
            None => return Err(AgrError::GlassIndexOutOfRange { index: 0, count }),
        };
        if index >= count {
            return Err(AgrError::GlassIndexOutOfRange { index, count });
        }
        Ok(self.glasses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> GeoJsonData {
        let mut data = GeoJsonData::default();
        let keys: Vec<&'static str> = data.properties().iter().map(|(key, _)| *key).collect();
        for key in keys {
            *data.property_mut(key).unwrap() = format!("{}-value", key);
        }
        data.coord_x = "37.6".to_string();
        data
    }

    #[test]
    fn every_property_key_is_writable() {
        let data = filled();
        for (key, value) in data.properties() {
            assert_eq!(value, format!("{}-value", key));
        }
        assert!(GeoJsonData::default().property_mut("imageBase64").is_none());
    }

    #[test]
    fn common_fields_for_ground() {
        let source = filled();
        let mut ground = GeoJsonData::for_ground();
        ground.coord_x = "1".to_string();
        ground.copy_common_fields_from(&source, true);

        assert_eq!(ground.address, "address-value");
        assert_eq!(ground.fno_name, LANDSCAPING_FNO_NAME);
        assert_eq!(ground.h_otn, "");
        assert_eq!(ground.spp_gns, "");
        assert_eq!(ground.coord_x, "1");
    }

    #[test]
    fn common_fields_for_building() {
        let source = filled();
        let mut building = GeoJsonData::default();
        building.copy_common_fields_from(&source, false);
        assert_eq!(building.fno_name, "FNO_name-value");
        assert_eq!(building.s_naz, "s_naz-value");
        assert_eq!(building.coord_x, "");
    }

    #[test]
    fn glass_editing() {
        let mut data = GeoJsonData::default();
        assert!(data.remove_glass(None).is_err());

        data.add_glass(GlassMaterial::new("A")).unwrap();
        data.add_glass(GlassMaterial::new("B")).unwrap();
        data.update_glass(0, GlassMaterial::new("A2")).unwrap();
        assert!(data.update_glass(2, GlassMaterial::new("C")).is_err());

        assert_eq!(data.remove_glass(None).unwrap().name, "B");
        assert_eq!(data.remove_glass(Some(0)).unwrap().name, "A2");
        assert!(data.glasses.is_empty());
    }

    #[test]
    fn glass_names_stay_unique() {
        let mut data = GeoJsonData::default();
        data.add_glass(GlassMaterial::new("Facade").with_rgb(1, 2, 3)).unwrap();
        data.add_glass(GlassMaterial::new("Lobby")).unwrap();

        let err = data.add_glass(GlassMaterial::new("Facade").with_rgb(9, 9, 9)).unwrap_err();
        assert!(matches!(err, AgrError::DuplicateGlassName(name) if name == "Facade"));
        assert!(data.update_glass(1, GlassMaterial::new("Facade")).is_err());
        // Quotes are written as apostrophes, so these two share a key.
        assert!(data.add_glass(GlassMaterial::new("Lobby\"")).is_ok());
        assert!(data.add_glass(GlassMaterial::new("Lobby'")).is_err());

        data.update_glass(0, GlassMaterial::new("Facade").with_rgb(4, 5, 6)).unwrap();
        assert_eq!(data.glasses.len(), 3);
        assert_eq!(data.glasses[0].rgb(), [4, 5, 6]);
        assert!(data.validate_glasses().is_ok());

        data.glasses.push(GlassMaterial::new("Lobby"));
        assert!(data.validate_glasses().is_err());
    }
}
