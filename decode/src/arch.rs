use serde::{Deserialize, Serialize};

use crate::info::InstructionInfo;

/// Minimum architecture version an encoding was introduced in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArchVersion {
    #[default]
    V4,
    V4T,
    V5T,
    V5TE,
    V6,
    V6K,
    V6T2,
    V7,
}

/// Optional extension an encoding depends on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsaFeature {
    #[default]
    Base,
    /// DSP multiply and saturating arithmetic (the `E` in `ARMv5TE`).
    Dsp,
    Jazelle,
    Security,
    Multiprocessing,
    Vfp2,
    Vfp3,
    AdvSimd,
    ThumbEe,
    Divide,
    /// Branches into the auxiliary architecture.
    Auxiliary,
}

/// Describes the simulated core, used to reject encodings it lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchConfig {
    pub version: ArchVersion,
    pub vfp: bool,
    pub advsimd: bool,
    pub thumbee: bool,
    pub divide: bool,
    pub auxiliary: bool,
}

impl Default for ArchConfig {
    fn default() -> Self {
        Self {
            version: ArchVersion::V7,
            vfp: true,
            advsimd: true,
            thumbee: true,
            divide: false,
            auxiliary: true,
        }
    }
}

impl ArchConfig {
    /// Returns `true` when the core implements an encoding requiring
    /// `version` and `feature`.
    #[must_use]
    pub const fn supports(&self, version: ArchVersion, feature: IsaFeature) -> bool {
        if (version as u8) > (self.version as u8) {
            return false;
        }

        match feature {
            IsaFeature::Base
            | IsaFeature::Dsp
            | IsaFeature::Jazelle
            | IsaFeature::Security
            | IsaFeature::Multiprocessing => true,
            IsaFeature::Vfp2 => self.vfp,
            IsaFeature::Vfp3 => self.vfp && (self.version as u8) >= (ArchVersion::V7 as u8),
            IsaFeature::AdvSimd => self.advsimd,
            IsaFeature::ThumbEe => self.thumbee,
            IsaFeature::Divide => self.divide,
            IsaFeature::Auxiliary => self.auxiliary,
        }
    }

    /// Returns `true` when the core executes `info`. Undefined encodings
    /// are never implemented.
    #[must_use]
    pub fn implements(&self, info: &InstructionInfo) -> bool {
        !info.is_undefined() && self.supports(info.arch, info.isa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_core_rejects_newer_encodings() {
        let v5 = ArchConfig {
            version: ArchVersion::V5TE,
            vfp: false,
            advsimd: false,
            thumbee: false,
            divide: false,
            auxiliary: true,
        };

        assert!(v5.supports(ArchVersion::V4T, IsaFeature::Base));
        assert!(v5.supports(ArchVersion::V5TE, IsaFeature::Dsp));
        assert!(!v5.supports(ArchVersion::V6T2, IsaFeature::Base));
        assert!(!v5.supports(ArchVersion::V5T, IsaFeature::Vfp2));
        assert!(v5.supports(ArchVersion::V4, IsaFeature::Auxiliary));
    }

    #[test]
    fn default_core_is_v7_without_divide() {
        let core = ArchConfig::default();

        assert!(core.supports(ArchVersion::V7, IsaFeature::AdvSimd));
        assert!(core.supports(ArchVersion::V7, IsaFeature::Vfp3));
        assert!(!core.supports(ArchVersion::V7, IsaFeature::Divide));
    }

    #[test]
    fn decoded_instructions_against_core() {
        use crate::context::{DecodeState, DecoderContext};

        let ctx = DecoderContext::shared();
        let state = DecodeState::default();
        let baa = ctx.decode_arm(0, 0xE12F_FF41, &state);
        let vadd = ctx.decode_arm(0, 0xF202_0844, &state);
        let undefined = ctx.decode_arm(0, 0xF800_0000, &state);

        let core = ArchConfig::default();
        assert!(core.implements(&baa));
        assert!(core.implements(&vadd));
        assert!(!core.implements(&undefined));

        let bare = ArchConfig {
            advsimd: false,
            auxiliary: false,
            ..core
        };
        assert!(!bare.implements(&baa));
        assert!(!bare.implements(&vadd));
    }
}
