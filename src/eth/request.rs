use crate::codec::{big_to_hex, int_to_hex};
use num_bigint::BigUint;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Call or transaction object sent with `eth_call`, `eth_estimateGas` and
/// `eth_sendTransaction`.
///
/// Only `from` is always sent; every other field goes out when set (non-empty
/// strings, positive `gas`/`nonce`, present big values).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub gas: u64,
    pub gas_price: Option<BigUint>,
    pub value: Option<BigUint>,
    pub data: String,
    pub nonce: u64,
}

impl Serialize for TransactionRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("from", &self.from)?;
        if !self.to.is_empty() {
            map.serialize_entry("to", &self.to)?;
        }
        if self.gas > 0 {
            map.serialize_entry("gas", &int_to_hex(self.gas))?;
        }
        if let Some(gas_price) = &self.gas_price {
            map.serialize_entry("gasPrice", &big_to_hex(gas_price))?;
        }
        if let Some(value) = &self.value {
            map.serialize_entry("value", &big_to_hex(value))?;
        }
        if !self.data.is_empty() {
            map.serialize_entry("data", &self.data)?;
        }
        if self.nonce > 0 {
            map.serialize_entry("nonce", &int_to_hex(self.nonce))?;
        }
        map.end()
    }
}
