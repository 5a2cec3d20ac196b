// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role held by a portal user.
///
/// Roles scope approval rights; most of them additionally depend on branch
/// affiliation or event ownership, which the workflow engine evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Authors events at a branch and submits them for review.
    SalesManager,
    /// Reviews events for their own branch.
    GeneralManager,
    /// Records outcomes and closes out approved events.
    MarketingManager,
    /// Final marketing sign-off across all branches.
    MarketingHead,
    /// Bypasses branch and ownership constraints.
    Admin,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SalesManager => "sales_manager",
            Self::GeneralManager => "general_manager",
            Self::MarketingManager => "marketing_manager",
            Self::MarketingHead => "marketing_head",
            Self::Admin => "admin",
        }
    }

    /// Parses a role from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRole` if the string is not a valid role.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "sales_manager" => Ok(Self::SalesManager),
            "general_manager" => Ok(Self::GeneralManager),
            "marketing_manager" => Ok(Self::MarketingManager),
            "marketing_head" => Ok(Self::MarketingHead),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
