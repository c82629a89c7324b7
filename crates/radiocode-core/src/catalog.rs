//! Built-in radio model catalog
//!
//! Fixed, process-lifetime table of the models the service supports out of
//! the box. Built once on first access; callers only ever see shared
//! references.

use std::sync::LazyLock;

use crate::model::RadioModel;

static CATALOG: LazyLock<RadioModels> = LazyLock::new(RadioModels::build);

/// The built-in model table.
pub fn catalog() -> &'static RadioModels {
    &CATALOG
}

/// All built-in [`RadioModel`] rules, one field per supported model.
#[derive(Debug)]
pub struct RadioModels {
    pub renault_dacia: RadioModel,
    pub chrysler_panasonic_tm9: RadioModel,
    pub ford_m_series: RadioModel,
    pub ford_v_series: RadioModel,
    pub ford_travelpilot: RadioModel,
    pub fiat_stilo_bravo_visteon: RadioModel,
    pub fiat_daiichi: RadioModel,
    pub toyota_erc: RadioModel,
    pub jeep_cherokee: RadioModel,
    pub nissan_glove_box: RadioModel,
    pub eclipse_esn: RadioModel,
}

fn model(name: &str, serial_max_len: u32, serial_pattern: &str) -> RadioModel {
    RadioModel::new(name, serial_max_len, serial_pattern).expect("catalog pattern must compile")
}

impl RadioModels {
    fn build() -> Self {
        Self {
            renault_dacia: model("renault-dacia", 4, "/^([A-Z]{1}[0-9]{3})$/i"),
            chrysler_panasonic_tm9: model("chrysler-panasonic-tm9", 4, "/^([0-9]{4})$/"),
            ford_m_series: model("ford-m-series", 6, "/^([0-9]{6})$/"),
            ford_v_series: model("ford-v-series", 6, "/^([0-9]{6})$/"),
            ford_travelpilot: model("ford-travelpilot", 7, "/^([0-9]{7})$/"),
            fiat_stilo_bravo_visteon: model("fiat-stilo-bravo-visteon", 6, "/^([0-9]{6})$/"),
            fiat_daiichi: model("fiat-daiichi", 4, "/^([0-9]{4})$/"),
            toyota_erc: model("toyota-erc", 16, "/^([0-9A-F]{16})$/i"),
            jeep_cherokee: model("jeep-cherokee", 14, "/^([A-Z0-9]{14})$/i"),
            nissan_glove_box: model("nissan-glove-box", 12, "/^([A-Z0-9]{12})$/i"),
            eclipse_esn: model("eclipse-esn", 6, "/^([0-9A-F]{6})$/i"),
        }
    }

    /// Iterate over the catalog in its fixed declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RadioModel> {
        [
            &self.renault_dacia,
            &self.chrysler_panasonic_tm9,
            &self.ford_m_series,
            &self.ford_v_series,
            &self.ford_travelpilot,
            &self.fiat_stilo_bravo_visteon,
            &self.fiat_daiichi,
            &self.toyota_erc,
            &self.jeep_cherokee,
            &self.nissan_glove_box,
            &self.eclipse_esn,
        ]
        .into_iter()
    }

    /// Look up a built-in model by its stable name.
    pub fn by_name(&self, name: &str) -> Option<&RadioModel> {
        self.iter().find(|model| model.name() == name)
    }
}
