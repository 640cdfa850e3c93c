use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerPositionType {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "CB")]
    CentreBack,
    #[serde(rename = "SB")]
    SideBack,
    #[serde(rename = "DMF")]
    DefensiveMidfielder,
    #[default]
    #[serde(rename = "CMF")]
    CentralMidfielder,
    #[serde(rename = "SMF")]
    SideMidfielder,
    #[serde(rename = "AMF")]
    AttackingMidfielder,
    #[serde(rename = "WF")]
    WingForward,
    #[serde(rename = "SS")]
    SecondStriker,
    #[serde(rename = "CF")]
    CentreForward,
}
