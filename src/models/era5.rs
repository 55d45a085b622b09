// ERA5 reanalysis short names

use crate::table::Model;

pub fn era5() -> Model {
    Model::builder("era5")
        .coordinate("t", "time")
        .coordinate("y", "latitude")
        .coordinate("x", "longitude")
        // pressure levels in hPa, 1000 up to 50
        .coordinate("plev", "level")
        // upper air
        .variable("geopot", "z")
        .variable("sh", "q")
        .variable("temp", "t")
        .variable("u", "u")
        .variable("v", "v")
        // surface
        .variable("mslp", "msl")
        .variable("u10", "u10")
        .variable("v10", "v10")
        .variable("t2m", "t2m")
        .build()
        .unwrap_or_else(|e| panic!("era5 table: {}", e))
}
