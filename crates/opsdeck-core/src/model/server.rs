use serde::{Deserialize, Serialize};

/// Host resource snapshot plus a short sample history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSummary {
    #[serde(default)]
    pub cpu: CpuInfo,
    #[serde(default)]
    pub ram: RamInfo,
    #[serde(default)]
    pub disk: DiskInfo,
    #[serde(default)]
    pub process: ProcessInfo,
    #[serde(default)]
    pub database: DatabaseInfo,
    #[serde(default)]
    pub history: Vec<ResourceSample>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuInfo {
    #[serde(default)]
    pub usage_pct: f64,
    #[serde(default)]
    pub cores: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RamInfo {
    #[serde(default)]
    pub percent: f64,
    #[serde(default)]
    pub used_gb: f64,
    #[serde(default)]
    pub total_gb: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskInfo {
    #[serde(default)]
    pub percent: f64,
    #[serde(default)]
    pub free_gb: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessInfo {
    #[serde(default)]
    pub rss_mb: u64,
    #[serde(default)]
    pub threads: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseInfo {
    #[serde(default)]
    pub size_mb: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSample {
    pub ts: String,
    #[serde(default)]
    pub cpu: f64,
    #[serde(default)]
    pub ram: f64,
}
