// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::provider::Provider;
use crate::vec::TrivialVec;

impl<T, const N: usize, P> Serialize for TrivialVec<T, N, P>
where
    T: Serialize + Copy,
    P: Provider,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            state.serialize_element(item)?;
        }
        state.end()
    }
}

impl<'de, T, const N: usize, P> Deserialize<'de> for TrivialVec<T, N, P>
where
    T: Deserialize<'de> + Copy,
    P: Provider + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TrivialVecVisitor {
            phantom: PhantomData,
        })
    }
}

struct TrivialVecVisitor<T, const N: usize, P> {
    phantom: PhantomData<(T, P)>,
}

impl<'de, T, const N: usize, P> Visitor<'de> for TrivialVecVisitor<T, N, P>
where
    T: Deserialize<'de> + Copy,
    P: Provider + Default,
{
    type Value = TrivialVec<T, N, P>;

    fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<B>(self, mut seq: B) -> Result<Self::Value, B::Error>
    where
        B: SeqAccess<'de>,
    {
        use serde::de::Error;
        let len = seq.size_hint().unwrap_or(0);
        let mut values = TrivialVec::new_in(P::default());
        values.try_reserve(len).map_err(B::Error::custom)?;

        while let Some(value) = seq.next_element()? {
            values.push(value);
        }

        Ok(values)
    }
}
