//! Target selection: turns strings like `x86_64-linux` into a composed lookup chain.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::error::TypeError;
use crate::types::{Arch, ArchTypes, Os, TypeLookup};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    pub arch: Arch,
    pub os: Option<Os>,
}

impl Target {
    pub const fn new(arch: Arch, os: Option<Os>) -> Self {
        Self { arch, os }
    }

    /// Architecture aliases, overlaid with the OS typedefs when an OS is set.
    pub fn types(&self) -> Arc<dyn TypeLookup> {
        let arch: Arc<dyn TypeLookup> = Arc::new(ArchTypes::for_arch(self.arch));
        let types = match self.os {
            Some(os) => Arc::new(os.types(arch)) as Arc<dyn TypeLookup>,
            None => arch,
        };
        debug!(triple = %self, "resolved target types");
        types
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.os {
            Some(os) => write!(f, "{}-{}", self.arch, os),
            None => write!(f, "{}", self.arch),
        }
    }
}

impl FromStr for Target {
    type Err = TypeError;

    /// Accepts `arch`, `arch-os[-env]`, or `arch-vendor-os[-env]`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unknown = || TypeError::UnknownTarget(value.to_owned());
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(unknown());
        }
        // Arch names may themselves contain '_' (x86_64, arm_be) but never '-'.
        let mut parts = trimmed.split('-');
        let arch = parts
            .next()
            .ok_or_else(unknown)?
            .parse::<Arch>()
            .map_err(|_| unknown())?;
        let rest: Vec<&str> = parts.collect();
        if rest.is_empty() {
            return Ok(Self { arch, os: None });
        }
        // Vendor and environment components are optional; the first one that
        // names an OS wins.
        let os = rest
            .iter()
            .find_map(|part| part.parse::<Os>().ok())
            .ok_or_else(unknown)?;
        Ok(Self { arch, os: Some(os) })
    }
}
