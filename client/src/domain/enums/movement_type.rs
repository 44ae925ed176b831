//! 出入库类型

use serde::{Deserialize, Serialize};

/// 出入库类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// 放入（入库）
    In,
    /// 取出（出库）
    Out,
}

impl MovementType {
    /// 线上接口使用的类型字符串
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// 从线上字段解析
    ///
    /// 兼容两种来源：小程序写入的 `in`/`out`，后端原生写入的 `入库`/`出库`
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "in" | "入库" => Some(Self::In),
            "out" | "出库" => Some(Self::Out),
            _ => None,
        }
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::In => write!(f, "入库"),
            Self::Out => write!(f, "出库"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_accepts_both_dialects() {
        assert_eq!(MovementType::from_wire("in"), Some(MovementType::In));
        assert_eq!(MovementType::from_wire("入库"), Some(MovementType::In));
        assert_eq!(MovementType::from_wire("out"), Some(MovementType::Out));
        assert_eq!(MovementType::from_wire("出库"), Some(MovementType::Out));
        assert_eq!(MovementType::from_wire("transfer"), None);
    }
}
