// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::ir::Type;
use serde::{Deserialize, Serialize};

/// Represents the target information the IR needs: pointer width for offset arithmetic, and
/// the layout facts a consumer needs when it lowers byte-level loads and stores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineModel {
    /// The name of the target, e.g. `nvptx64` or `spir`
    pub architecture: String,
    /// Width of a pointer (and therefore of an array offset), in bits
    pub pointer_width: u64,
    /// Width of the memory access unit, in bits. The IR models memory as bytes.
    pub byte_width: u64,
    pub is_big_endian: bool,
}

impl MachineModel {
    /// 64-bit little endian target, as produced for CUDA (`nvptx64`).
    pub fn nvptx64() -> Self {
        MachineModel {
            architecture: "nvptx64".to_string(),
            pointer_width: 64,
            byte_width: 8,
            is_big_endian: false,
        }
    }

    /// 32-bit little endian target, as produced for OpenCL (`spir`).
    pub fn spir() -> Self {
        MachineModel {
            architecture: "spir".to_string(),
            pointer_width: 32,
            byte_width: 8,
            is_big_endian: false,
        }
    }

    /// `Pointer(pointer_width)`
    pub fn pointer_type(&self) -> Type {
        Type::pointer(self.pointer_width)
    }

    /// Type of an array offset: `BV(pointer_width)`
    pub fn offset_type(&self) -> Type {
        Type::bv(self.pointer_width)
    }
}

#[cfg(test)]
pub mod test_util {
    use super::MachineModel;

    pub fn machine_model_test_stub() -> MachineModel {
        MachineModel {
            architecture: "x86_64".to_string(),
            pointer_width: 64,
            byte_width: 8,
            is_big_endian: false,
        }
    }
}
