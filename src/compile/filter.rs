use crate::error::FilterError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Comparison operator of a spec filter.
///
/// There is deliberately no "!=": a negated attribute match cannot be
/// expressed over the raw attribute blob, so it is refused when the filter
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ge,
    Le,
    Gt,
    Lt,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
        }
    }

    /// Ordered comparisons; these can never be answered by a LIKE pattern.
    pub fn is_range(self) -> bool {
        !matches!(self, Operator::Eq)
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" => Ok(Operator::Eq),
            ">=" => Ok(Operator::Ge),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            "<" => Ok(Operator::Lt),
            other => Err(FilterError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One `attribute <op> value` constraint.
///
/// `name` is either a catalog attribute name ("Drain to Source Voltage") or
/// one of its short aliases ("Vds"); the compiler expands aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecFilter {
    pub name: String,
    #[serde(rename = "op")]
    pub operator: Operator,
    pub value: String,
}

impl SpecFilter {
    pub fn new(name: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self { name: name.into(), operator, value: value.into() }
    }

    /// Build a filter from a textual operator, rejecting anything outside
    /// `=, >=, <=, >, <`.
    pub fn try_new(name: impl Into<String>, operator: &str, value: impl Into<String>) -> Result<Self, FilterError> {
        Ok(Self::new(name, operator.parse()?, value))
    }

    /// Parse a `Name<op>Value` expression such as `Vds>=30V` or
    /// `Interface = I2C`.
    ///
    /// "!=" is recognized so it can be refused as an operator instead of
    /// being read as a name ending in '!'.
    pub fn parse(expression: &str) -> Result<Self, FilterError> {
        let caps = regex!(r"^\s*([^<>=!]+?)\s*(!=|>=|<=|==|=|>|<)\s*(.+?)\s*$")
            .captures(expression)
            .ok_or_else(|| FilterError::InvalidExpression(expression.to_string()))?;
        Self::try_new(&caps[1], &caps[2], &caps[3])
    }
}

impl fmt::Display for SpecFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.operator, self.value)
    }
}
