//! Named CPU architectures and their ABI parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;
use crate::types::endianness::Endianness;
use crate::types::scalar::PointerWidth;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchSpec {
    pub name: &'static str,
    pub pointer_width: PointerWidth,
    pub endianness: Endianness,
    /// Upper bound on scalar alignment imposed by the ABI, if any.
    pub max_alignment: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arch {
    X86,
    X86_64,
    Arm,
    ArmBe,
    Arm64,
    Arm64Be,
    Mips,
    MipsLe,
    Mips64,
    Mips64Le,
    Ppc,
    Ppc64,
}

impl Arch {
    pub const ALL: [Arch; 12] = [
        Arch::X86,
        Arch::X86_64,
        Arch::Arm,
        Arch::ArmBe,
        Arch::Arm64,
        Arch::Arm64Be,
        Arch::Mips,
        Arch::MipsLe,
        Arch::Mips64,
        Arch::Mips64Le,
        Arch::Ppc,
        Arch::Ppc64,
    ];

    pub const fn spec(self) -> ArchSpec {
        use Endianness::{Big, Little};
        use PointerWidth::{W32, W64};
        let (name, pointer_width, endianness) = match self {
            Arch::X86 => ("x86", W32, Little),
            Arch::X86_64 => ("x86_64", W64, Little),
            Arch::Arm => ("arm", W32, Little),
            Arch::ArmBe => ("arm_be", W32, Big),
            Arch::Arm64 => ("arm64", W64, Little),
            Arch::Arm64Be => ("arm64_be", W64, Big),
            Arch::Mips => ("mips", W32, Big),
            Arch::MipsLe => ("mips_le", W32, Little),
            Arch::Mips64 => ("mips64", W64, Big),
            Arch::Mips64Le => ("mips64_le", W64, Little),
            Arch::Ppc => ("ppc", W32, Big),
            Arch::Ppc64 => ("ppc64", W64, Big),
        };
        // i386 SysV aligns long long and double to 4 bytes.
        let max_alignment = match self {
            Arch::X86 => Some(4),
            _ => None,
        };
        ArchSpec {
            name,
            pointer_width,
            endianness,
            max_alignment,
        }
    }

    pub const fn name(self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Arch {
    type Err = TypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let arch = match value.to_ascii_lowercase().replace('-', "_").as_str() {
            "x86" | "i386" | "i486" | "i586" | "i686" | "ia32" => Arch::X86,
            "x86_64" | "amd64" | "x64" => Arch::X86_64,
            "arm" | "armv7" | "arm_le" | "armel" => Arch::Arm,
            "arm_be" | "armeb" => Arch::ArmBe,
            "arm64" | "aarch64" | "arm64_le" => Arch::Arm64,
            "arm64_be" | "aarch64_be" => Arch::Arm64Be,
            "mips" | "mips_be" => Arch::Mips,
            "mips_le" | "mipsel" => Arch::MipsLe,
            "mips64" | "mips64_be" => Arch::Mips64,
            "mips64_le" | "mips64el" => Arch::Mips64Le,
            "ppc" | "powerpc" => Arch::Ppc,
            "ppc64" | "powerpc64" => Arch::Ppc64,
            _ => return Err(TypeError::UnknownTarget(value.to_owned())),
        };
        Ok(arch)
    }
}
