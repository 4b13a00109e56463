//! Host networking (`network/`).

use std::net::{Ipv4Addr, Ipv6Addr};

use hasupervisor_core::Field;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceType {
    Ethernet,
    Wireless,
    Vlan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceMethod {
    Disabled,
    Static,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WifiMode {
    Infrastructure,
    Mesh,
    Adhoc,
    Ap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthMethod {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "wep")]
    Wep,
    #[serde(rename = "wpa-psk")]
    WpaPsk,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IpBase {
    pub method: InterfaceMethod,
    pub ready: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IPv4 {
    #[serde(flatten)]
    pub base: IpBase,
    /// Addresses in CIDR notation, e.g. `192.168.1.5/24`.
    pub address: Vec<String>,
    pub nameservers: Vec<Ipv4Addr>,
    pub gateway: Option<Ipv4Addr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IPv6 {
    #[serde(flatten)]
    pub base: IpBase,
    pub address: Vec<String>,
    pub nameservers: Vec<Ipv6Addr>,
    pub gateway: Option<Ipv6Addr>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wifi {
    pub mode: WifiMode,
    pub auth: AuthMethod,
    pub ssid: String,
    pub signal: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vlan {
    pub id: u16,
    pub interface: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub interface: String,
    #[serde(rename = "type")]
    pub interface_type: InterfaceType,
    pub enabled: bool,
    pub connected: bool,
    pub primary: bool,
    pub mac: String,
    pub ipv4: IPv4,
    pub ipv6: IPv6,
    pub wifi: Option<Wifi>,
    pub vlan: Option<Vlan>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DockerNetwork {
    pub interface: String,
    /// Network in CIDR notation.
    pub address: String,
    pub gateway: Ipv4Addr,
    pub dns: Ipv4Addr,
}

/// Response of `GET network/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub interfaces: Vec<NetworkInterface>,
    pub docker: DockerNetwork,
    pub host_internet: Option<bool>,
    pub supervisor_internet: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IPv4Config {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub method: Field<InterfaceMethod>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub gateway: Field<Ipv4Addr>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub nameservers: Field<Vec<Ipv4Addr>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IPv6Config {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub method: Field<InterfaceMethod>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub gateway: Field<Ipv6Addr>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub nameservers: Field<Vec<Ipv6Addr>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WifiConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub mode: Field<WifiMode>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub method: Field<AuthMethod>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ssid: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub psk: Field<String>,
}

/// Body of `POST network/interface/{interface}/update`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfaceConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ipv4: Field<IPv4Config>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ipv6: Field<IPv6Config>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub wifi: Field<WifiConfig>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub enabled: Field<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub mode: WifiMode,
    pub ssid: String,
    pub frequency: i64,
    pub signal: i64,
    pub mac: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessPointList {
    pub accesspoints: Vec<AccessPoint>,
}

/// Body of `POST network/interface/{interface}/vlan/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VlanConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ipv4: Field<IPv4Config>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ipv6: Field<IPv6Config>,
}

request_models!(IPv4Config, IPv6Config, WifiConfig);
options_models!(NetworkInterfaceConfig, VlanConfig);
response_models!(NetworkInfo, NetworkInterface, AccessPointList);
