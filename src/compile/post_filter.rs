use super::Operator;
use crate::TolerancePolicy;
use crate::units::SpecParser;
use serde::Serialize;

/// A numeric check run on fetched rows after the store query.
///
/// Registered for every filter that went through the LIKE path with a
/// parseable value: substring matching cannot express "< 50mOhm", so the
/// store query only narrows candidates and this check decides.
#[derive(Debug, Clone, Serialize)]
pub struct PostFilter {
    /// Filter name as supplied ("Vgs(th)").
    pub name: String,
    /// Catalog names checked on the row, in order.
    pub attribute_names: Vec<String>,
    pub operator: Operator,
    /// Parsed targets; a row passes when any of them is satisfied.
    pub targets: Vec<f64>,
    /// Values of an "=" group the parser could not read; a row whose value
    /// equals one of them (ignoring case) passes too.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub literals: Vec<String>,
    #[serde(skip)]
    pub(crate) parser: SpecParser,
}

impl PostFilter {
    /// Does a row with these attribute pairs pass?
    ///
    /// A row without the attribute, or with a value that does not parse, is
    /// rejected.
    pub fn accepts(&self, attributes: &[(String, String)], policy: &TolerancePolicy) -> bool {
        let literal_hit = attributes.iter().any(|(name, value)| {
            self.attribute_names.contains(name) && self.literals.iter().any(|l| l.trim().eq_ignore_ascii_case(value.trim()))
        });
        if literal_hit {
            return true;
        }

        let Some(raw) = attributes
            .iter()
            .find(|(name, value)| self.attribute_names.contains(name) && !self.parser.range(value).is_empty())
            .map(|(_, value)| value)
        else {
            return false;
        };

        if self.parser.is_range() {
            let range = self.parser.range(raw);
            return self.targets.iter().any(|&target| match self.operator {
                Operator::Lt | Operator::Le => {
                    range.max.or(range.min).is_some_and(|v| policy.satisfies(v, self.operator, target))
                }
                Operator::Gt | Operator::Ge => {
                    range.min.or(range.max).is_some_and(|v| policy.satisfies(v, self.operator, target))
                }
                Operator::Eq => {
                    let band = policy.equality_band(target);
                    let low = range.min.unwrap_or(f64::NEG_INFINITY);
                    let high = range.max.unwrap_or(f64::INFINITY);
                    target >= low - band && target <= high + band
                }
            });
        }

        let Some(actual) = self.parser.scalar(raw) else { return false };
        self.targets.iter().any(|&target| policy.satisfies(actual, self.operator, target))
    }
}
