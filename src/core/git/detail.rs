use crate::utils::{Result, SweepError, ToolOperation};

/// `%H%n%an%n%ad%n%s`: hash, author, date and subject on separate lines.
pub const DETAIL_FORMAT: &str = "--pretty=format:%H%n%an%n%ad%n%s";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDetail {
    pub name: String,
    pub hash: String,
    pub author: String,
    pub date: String,
    pub subject: String,
}

impl BranchDetail {
    pub fn parse(name: &str, output: &str) -> Result<Self> {
        let mut lines = output.trim().lines();
        match (lines.next(), lines.next(), lines.next(), lines.next()) {
            (Some(hash), Some(author), Some(date), Some(subject)) => Ok(Self {
                name: name.to_string(),
                hash: hash.to_string(),
                author: author.to_string(),
                date: date.to_string(),
                subject: subject.to_string(),
            }),
            _ => Err(SweepError::external_tool(
                ToolOperation::ShowBranchDetail,
                "unexpected git log output",
                output,
            )),
        }
    }

    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}
