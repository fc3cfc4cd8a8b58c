//! Declarative mapping from permission groups to dashboard roles.
//!
//! A permission button reads `group:action`; the group alone decides
//! which role it grants.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_DEVICE_MANAGER: &str = "device-manager";
pub const ROLE_USER: &str = "user";

/// `(permission group, role)` pairs.
pub const ROLE_RULES: &[(&str, &str)] = &[
    ("sysUser", ROLE_ADMIN),
    ("sysRole", ROLE_ADMIN),
    ("sysMenu", ROLE_ADMIN),
    ("sysConfig", ROLE_ADMIN),
    ("dev", ROLE_DEVICE_MANAGER),
    ("iotDev", ROLE_DEVICE_MANAGER),
    ("devType", ROLE_DEVICE_MANAGER),
];

/// Role order in the output.
const ROLE_ORDER: [&str; 3] = [ROLE_ADMIN, ROLE_DEVICE_MANAGER, ROLE_USER];

pub fn permission_group(button: &str) -> &str {
    button.split_once(':').map_or(button, |(group, _)| group)
}

pub fn role_for(group: &str) -> Option<&'static str> {
    ROLE_RULES
        .iter()
        .find(|(rule_group, _)| *rule_group == group)
        .map(|(_, role)| *role)
}

/// Roles granted by a button list. Anyone with a profile is at least a user.
pub fn derive_roles<S: AsRef<str>>(buttons: &[S]) -> Vec<String> {
    let granted: Vec<&str> = buttons
        .iter()
        .filter_map(|button| role_for(permission_group(button.as_ref())))
        .chain(std::iter::once(ROLE_USER))
        .collect();

    ROLE_ORDER
        .iter()
        .filter(|role| granted.contains(role))
        .map(|role| role.to_string())
        .collect()
}
