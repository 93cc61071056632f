use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use alloy::primitives::Bytes;

/// Hardhat build artifact, reduced to the two fields the deployer needs.
/// The ABI is carried along opaquely; nothing here interprets it.
#[derive(Debug, Deserialize)]
pub struct ContractArtifact {
    pub abi: serde_json::Value,
    pub bytecode: String,
}

impl ContractArtifact {
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read artifact file: {}", path))?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let artifact: ContractArtifact = serde_json::from_str(raw)?;
        if artifact.bytecode.trim_start_matches("0x").is_empty() {
            return Err(anyhow!("Artifact has empty bytecode (interface-only artifact?)"));
        }
        Ok(artifact)
    }

    pub fn bytecode_bytes(&self) -> Result<Bytes> {
        self.bytecode
            .parse::<Bytes>()
            .map_err(|e| anyhow!("Invalid artifact bytecode hex: {}", e))
    }

    /// Creation bytecode with the ABI-encoded constructor arguments appended.
    pub fn init_code(&self, constructor_args: &[u8]) -> Result<Bytes> {
        let mut code = self.bytecode_bytes()?.to_vec();
        code.extend_from_slice(constructor_args);
        Ok(Bytes::from(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "contractName": "NonfungiblePositionManager",
        "abi": [{"type": "constructor", "inputs": [
            {"name": "_factory", "type": "address"},
            {"name": "_WETH9", "type": "address"},
            {"name": "_tokenDescriptor_", "type": "address"}
        ]}],
        "bytecode": "0x60806040"
    }"#;

    #[test]
    fn parses_hardhat_artifact() {
        let artifact = ContractArtifact::parse(SAMPLE).unwrap();
        assert_eq!(
            artifact.bytecode_bytes().unwrap().as_ref(),
            [0x60, 0x80, 0x60, 0x40]
        );
        assert!(artifact.abi.is_array());
    }

    #[test]
    fn init_code_appends_constructor_args() {
        let artifact = ContractArtifact::parse(SAMPLE).unwrap();
        let args = vec![0xaa; 96];
        let init_code = artifact.init_code(&args).unwrap();
        assert_eq!(init_code.len(), 4 + 96);
        assert_eq!(&init_code[..4], [0x60, 0x80, 0x60, 0x40]);
        assert_eq!(&init_code[4..], args.as_slice());
    }

    #[test]
    fn rejects_bad_or_empty_bytecode() {
        let bad = SAMPLE.replace("0x60806040", "0xzz");
        assert!(ContractArtifact::parse(&bad).unwrap().bytecode_bytes().is_err());

        let empty = SAMPLE.replace("0x60806040", "0x");
        assert!(ContractArtifact::parse(&empty).is_err());
    }
}
