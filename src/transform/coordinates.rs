use glam::{DVec3, Vec3};

/// Swap the second and third components.
///
/// Converts East-Up-North (engine space, Y up) to East-North-Up and back;
/// the permutation is its own inverse.
pub fn swap_yz(v: DVec3) -> DVec3 {
    DVec3::new(v.x, v.z, v.y)
}

/// East-Up-North engine point to East-North-Up.
pub fn eun_to_enu(local: DVec3) -> DVec3 {
    swap_yz(local)
}

/// East-North-Up point to East-Up-North engine space.
pub fn enu_to_eun(enu: DVec3) -> DVec3 {
    swap_yz(enu)
}

/// Widen a single-precision engine point.
pub fn widen(local: Vec3) -> DVec3 {
    local.as_dvec3()
}
