use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::reports::EnergyBaseline;
use crate::types::Bands;

/// Login account. The password never leaves this table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    #[serde(skip_serializing)]
    pub password: String,
    pub real_name: String,
    pub roles: Vec<String>,
    pub username: String,
    pub home_path: String,
}

/// Session profile returned by `/sysAuth/userInfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub account: String,
    pub real_name: String,
    pub avatar: Option<String>,
    pub introduction: Option<String>,
    pub address: Option<String>,
    pub signature: Option<String>,
    pub org_id: u64,
    pub org_name: String,
    pub org_type: String,
    pub pos_name: Option<String>,
    pub buttons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub description: String,
    pub create_time: String,
    pub update_time: String,
}

/// Profile served for usernames without their own entry.
pub const FALLBACK_PROFILE: &str = "FAQC";

/// Immutable mock tables, built once and shared through the router state.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub profiles: HashMap<String, Profile>,
    pub enterprises: Vec<Enterprise>,
    pub energy_baseline: Vec<EnergyBaseline>,
}

impl Fixtures {
    pub fn load() -> Self {
        Self {
            users: users(),
            profiles: profiles(),
            enterprises: enterprises(),
            energy_baseline: energy_baseline(),
        }
    }

    /// Exact, case-sensitive match on both fields.
    pub fn find_user(&self, account: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.username == account && user.password == password)
    }

    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    pub fn profile(&self, username: &str) -> Option<&Profile> {
        self.profiles
            .get(username)
            .or_else(|| self.profiles.get(FALLBACK_PROFILE))
    }

    pub fn enterprise(&self, id: &str) -> Option<&Enterprise> {
        self.enterprises.iter().find(|enterprise| enterprise.id == id)
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::load()
    }
}

fn user(id: u32, username: &str, real_name: &str, role: &str) -> User {
    User {
        id,
        password: "123456".to_string(),
        real_name: real_name.to_string(),
        roles: vec![role.to_string()],
        username: username.to_string(),
        home_path: "/energy/overview".to_string(),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(0, "vben", "Vben", "super"),
        user(1, "admin", "Admin", "admin"),
        user(2, "jack", "Jack", "user"),
        user(3, "FAQC", "富奥汽车", "admin"),
    ]
}

fn buttons(list: &[&str]) -> Vec<String> {
    list.iter().map(|button| button.to_string()).collect()
}

pub fn profiles() -> HashMap<String, Profile> {
    let faqc = Profile {
        account: "FAQC".to_string(),
        real_name: "富奥汽车".to_string(),
        avatar: None,
        introduction: Some("富奥汽车零部件有限公司管理员".to_string()),
        address: Some("吉林省长春市".to_string()),
        signature: Some("致力于汽车零部件制造与创新".to_string()),
        org_id: 21255947002821,
        org_name: "富奥汽车".to_string(),
        org_type: "201".to_string(),
        pos_name: Some("系统管理员".to_string()),
        buttons: buttons(&[
            "sysUser:page",
            "sysUser:update",
            "sysUser:add",
            "sysUser:delete",
            "sysUser:detail",
            "sysUser:grantRole",
            "sysUser:resetPwd",
            "sysUser:setStatus",
            "sysOnlineUser:forceOffline",
            "sysRole:page",
            "sysRole:update",
            "sysRole:add",
            "sysRole:delete",
            "sysRole:grantMenu",
            "sysRole:grantDataScope",
            "sysRole:setStatus",
            "sysOrg:update",
            "sysOrg:add",
            "sysOrg:delete",
            "sysPos:list",
            "sysPos:update",
            "sysPos:add",
            "sysPos:delete",
            "sysUser:changePwd",
            "sysUser:baseInfo",
            "sysFile:uploadSignature",
            "sysFile:uploadAvatar",
            "sysNotice:page",
            "sysNotice:update",
            "sysNotice:add",
            "sysNotice:delete",
            "sysNotice:detail",
            "sysMenu:page",
            "sysMenu:update",
            "sysMenu:add",
            "sysMenu:delete",
            "sysMenu:detail",
            "energy:overview",
            "energy:monitor",
            "energy:analysis",
            "energy:report",
        ]),
    };

    let vben = Profile {
        account: "vben".to_string(),
        real_name: "Vben".to_string(),
        avatar: Some("/avatars/vben.png".to_string()),
        introduction: Some("Vue Vben Admin 超级管理员".to_string()),
        address: Some("中国".to_string()),
        signature: Some("Vue3 + TypeScript + Vite 管理系统".to_string()),
        org_id: 1,
        org_name: "Vben组织".to_string(),
        org_type: "100".to_string(),
        pos_name: Some("超级管理员".to_string()),
        buttons: buttons(&["super:all", "admin:all", "user:all"]),
    };

    let admin = Profile {
        account: "admin".to_string(),
        real_name: "Admin".to_string(),
        avatar: Some("/avatars/admin.png".to_string()),
        introduction: Some("系统管理员".to_string()),
        address: Some("中国".to_string()),
        signature: Some("负责系统管理和维护".to_string()),
        org_id: 2,
        org_name: "管理组织".to_string(),
        org_type: "200".to_string(),
        pos_name: Some("管理员".to_string()),
        buttons: buttons(&["admin:all", "user:read"]),
    };

    let jack = Profile {
        account: "jack".to_string(),
        real_name: "Jack".to_string(),
        avatar: Some("/avatars/jack.png".to_string()),
        introduction: Some("普通用户".to_string()),
        address: Some("中国".to_string()),
        signature: Some("系统普通用户".to_string()),
        org_id: 3,
        org_name: "用户组织".to_string(),
        org_type: "300".to_string(),
        pos_name: Some("普通用户".to_string()),
        buttons: buttons(&["user:read"]),
    };

    [faqc, vben, admin, jack]
        .into_iter()
        .map(|profile| (profile.account.clone(), profile))
        .collect()
}

fn enterprise(
    id: &str,
    name: &str,
    code: &str,
    kind: &str,
    description: &str,
    create_time: &str,
    update_time: &str,
) -> Enterprise {
    Enterprise {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        kind: kind.to_string(),
        status: "active".to_string(),
        description: description.to_string(),
        create_time: create_time.to_string(),
        update_time: update_time.to_string(),
    }
}

pub fn enterprises() -> Vec<Enterprise> {
    vec![
        enterprise(
            "enterprise_001",
            "北京新能源科技有限公司",
            "BJXNY001",
            "solar",
            "专注于太阳能发电技术研发与应用",
            "2020-01-15T08:00:00Z",
            "2024-06-20T10:30:00Z",
        ),
        enterprise(
            "enterprise_002",
            "上海绿色电力集团",
            "SHLSDL002",
            "wind",
            "大型风力发电企业，覆盖华东地区",
            "2019-03-22T09:15:00Z",
            "2024-07-10T14:20:00Z",
        ),
        enterprise(
            "enterprise_003",
            "深圳智慧能源股份公司",
            "SZZHNY003",
            "storage",
            "智能储能系统解决方案提供商",
            "2021-05-10T11:30:00Z",
            "2024-07-15T16:45:00Z",
        ),
        enterprise(
            "enterprise_004",
            "广州清洁能源发展公司",
            "GZQJNY004",
            "comprehensive",
            "综合性清洁能源开发与运营企业",
            "2020-08-18T13:20:00Z",
            "2024-07-12T09:10:00Z",
        ),
        enterprise(
            "enterprise_005",
            "杭州可再生能源企业",
            "HZKZS005",
            "solar",
            "可再生能源技术创新与产业化",
            "2022-02-28T15:45:00Z",
            "2024-07-18T11:25:00Z",
        ),
        enterprise(
            "enterprise_006",
            "天津海上风电有限公司",
            "TJHSFD006",
            "wind",
            "专业海上风力发电项目开发运营",
            "2021-11-12T10:00:00Z",
            "2024-07-08T13:30:00Z",
        ),
        enterprise(
            "enterprise_007",
            "成都分布式光伏集团",
            "CDFBSGF007",
            "solar",
            "分布式光伏发电系统集成商",
            "2020-12-05T14:15:00Z",
            "2024-07-14T08:50:00Z",
        ),
        enterprise(
            "enterprise_008",
            "武汉储能技术研发中心",
            "WHCNJS008",
            "storage",
            "储能技术研发与产业化应用",
            "2021-07-20T16:30:00Z",
            "2024-07-16T12:40:00Z",
        ),
    ]
}

/// Seven measured reference days, one row per day.
pub fn energy_baseline() -> Vec<EnergyBaseline> {
    vec![
        EnergyBaseline {
            date: "2025-07-02",
            load: Bands::new(120.5, 98.3, 85.2, 65.8, 45.2),
            wind: Bands::new(15.2, 18.6, 22.1, 28.5, 32.8),
            storage_charge: Bands::new(0.0, 0.0, 5.2, 12.8, 18.5),
            storage_discharge: Bands::new(8.2, 6.5, 3.1, 0.0, 0.0),
            charging_pile: Bands::new(5.2, 4.8, 3.5, 2.1, 1.8),
            grid: Bands::new(103.1, 79.2, 64.6, 35.2, 25.6),
            solar_consumption: Bands::new(45.2, 52.8, 48.5, 38.2, 25.8),
            grid_connection: 68.5,
        },
        EnergyBaseline {
            date: "2025-07-03",
            load: Bands::new(135.8, 112.5, 95.8, 72.5, 52.8),
            wind: Bands::new(18.5, 22.8, 26.5, 32.1, 38.5),
            storage_charge: Bands::new(0.0, 1.2, 6.8, 14.5, 21.2),
            storage_discharge: Bands::new(12.5, 9.8, 5.2, 1.8, 0.2),
            charging_pile: Bands::new(6.8, 5.5, 4.2, 2.8, 2.1),
            grid: Bands::new(116.5, 88.2, 70.8, 42.1, 31.2),
            solar_consumption: Bands::new(52.8, 61.5, 56.2, 44.8, 30.2),
            grid_connection: 78.2,
        },
        EnergyBaseline {
            date: "2025-07-04",
            load: Bands::new(128.2, 105.8, 89.5, 68.2, 48.5),
            wind: Bands::new(16.8, 20.5, 24.2, 29.8, 35.2),
            storage_charge: Bands::new(0.0, 0.8, 5.8, 13.2, 19.8),
            storage_discharge: Bands::new(10.2, 8.5, 4.8, 1.2, 0.0),
            charging_pile: Bands::new(5.8, 5.2, 3.8, 2.5, 1.9),
            grid: Bands::new(111.6, 84.6, 66.9, 38.7, 28.8),
            solar_consumption: Bands::new(48.5, 56.8, 52.2, 41.5, 28.2),
            grid_connection: 72.8,
        },
        EnergyBaseline {
            date: "2025-07-05",
            load: Bands::new(145.2, 118.8, 102.5, 78.5, 58.2),
            wind: Bands::new(22.5, 26.8, 30.2, 36.5, 42.8),
            storage_charge: Bands::new(0.0, 2.5, 8.2, 16.8, 24.5),
            storage_discharge: Bands::new(18.5, 15.2, 9.8, 3.5, 1.2),
            charging_pile: Bands::new(8.5, 7.2, 5.8, 3.8, 2.8),
            grid: Bands::new(118.2, 89.4, 72.5, 44.2, 33.8),
            solar_consumption: Bands::new(58.2, 68.5, 62.8, 48.5, 32.8),
            grid_connection: 85.2,
        },
        EnergyBaseline {
            date: "2025-07-06",
            load: Bands::new(132.8, 108.5, 92.8, 71.2, 51.8),
            wind: Bands::new(19.2, 23.5, 27.8, 33.2, 38.8),
            storage_charge: Bands::new(0.0, 1.8, 7.2, 15.5, 22.8),
            storage_discharge: Bands::new(14.8, 11.5, 7.2, 2.8, 0.8),
            charging_pile: Bands::new(7.2, 6.5, 4.8, 3.2, 2.5),
            grid: Bands::new(106.8, 81.5, 63.8, 37.2, 28.2),
            solar_consumption: Bands::new(51.2, 59.8, 54.5, 43.2, 29.5),
            grid_connection: 75.8,
        },
        EnergyBaseline {
            date: "2025-07-07",
            load: Bands::new(138.5, 115.2, 98.5, 75.8, 55.2),
            wind: Bands::new(20.8, 25.2, 29.5, 35.8, 41.2),
            storage_charge: Bands::new(0.0, 2.2, 7.8, 16.2, 23.5),
            storage_discharge: Bands::new(16.2, 13.8, 8.5, 3.2, 1.5),
            charging_pile: Bands::new(8.2, 7.5, 5.8, 3.8, 2.8),
            grid: Bands::new(114.1, 86.7, 69.2, 40.8, 31.2),
            solar_consumption: Bands::new(55.8, 65.2, 59.5, 46.8, 31.8),
            grid_connection: 82.5,
        },
        EnergyBaseline {
            date: "2025-07-08",
            load: Bands::new(142.6, 118.5, 102.8, 78.5, 58.2),
            wind: Bands::new(22.8, 28.5, 32.1, 38.6, 42.3),
            storage_charge: Bands::new(0.0, 2.1, 7.5, 15.8, 22.5),
            storage_discharge: Bands::new(15.2, 12.8, 8.5, 2.8, 0.5),
            charging_pile: Bands::new(9.8, 8.5, 6.8, 4.2, 2.8),
            grid: Bands::new(118.5, 95.2, 75.8, 45.5, 34.8),
            solar_consumption: Bands::new(58.5, 68.2, 62.8, 48.5, 32.8),
            grid_connection: 85.2,
        },
    ]
}
