// Met Office Unified Model output, as converted to netCDF

use crate::table::Model;

pub fn um() -> Model {
    Model::builder("um")
        .coordinate("t", "time")
        .coordinate("z", "thlev_zsea_theta")
        .coordinate("lev", "thlev_model_level_number")
        .coordinate("s", "thlev_C_theta")
        .coordinate("y", "latitude")
        .coordinate("x", "longitude")
        .coordinate("lw_band", "lw_bband_lev_pseudo")
        .variable("u", "STASH_m01s00i002")
        .variable("v", "STASH_m01s00i003")
        .variable("w", "STASH_m01s00i150")
        .variable("pres", "STASH_m01s00i408")
        .variable("temp_v", "virtual_temperature")
        .variable("sh", "STASH_m01s00i010")
        .variable("t_sfc", "STASH_m01s00i024")
        .variable("toa_isr", "STASH_m01s01i207")
        .variable("toa_olr", "STASH_m01s02i205")
        .variable("toa_olr_cs", "STASH_m01s02i206")
        .variable("toa_osr", "STASH_m01s01i205")
        .variable("toa_osr_cs", "STASH_m01s01i209")
        .variable("sfc_dn_sw", "STASH_m01s01i235")
        .variable("sfc_net_down_lw", "STASH_m01s02i201")
        // no STASH_ prefix in the converted files
        .variable("sfc_net_down_sw", "m01s01i201")
        .variable("lw_up", "STASH_m01s02i509")
        .variable("ocean_frac", "STASH_m01s03i395")
        .variable("temp", "STASH_m01s16i004")
        .variable("rh", "STASH_m01s30i113")
        .variable("cld_ice_mf", "STASH_m01s00i012")
        .variable("cld_liq_mf", "STASH_m01s00i254")
        .variable("cld_ice_v", "STASH_m01s00i268")
        .variable("cld_liq_v", "STASH_m01s00i267")
        .variable("cld_v", "STASH_m01s00i266")
        .variable("caf", "STASH_m01s09i217")
        .variable("dt_sw", "STASH_m01s01i232")
        .variable("dt_lw", "STASH_m01s02i232")
        .variable("lwp", "STASH_m01s30i405")
        .variable("iwp", "STASH_m01s30i406")
        .variable("wvp", "STASH_m01s30i461")
        .build()
        .unwrap_or_else(|e| panic!("um table: {}", e))
}
