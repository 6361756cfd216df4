use core::marker::PhantomData;
use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::DynVec;

/// Upper bound on the slots pre-allocated from a format's length hint.
///
/// Length prefixes come from the input, so larger sequences grow by pushing.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for DynVec<T> {
    /// Serialize a `DynVec` as a sequence of its live elements.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for DynVec<T>
where
    T: Deserialize<'de> + Copy + Default,
{
    /// Deserialize a `DynVec` from a sequence.
    ///
    /// The buffer is sized from the length hint when the format provides one,
    /// up to a fixed bound.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DynVecVisitor<T> {
            _marker: PhantomData<T>,
        }

        impl<'de, T> Visitor<'de> for DynVecVisitor<T>
        where
            T: Deserialize<'de> + Copy + Default,
        {
            type Value = DynVec<T>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vec = match seq.size_hint() {
                    Some(hint) => DynVec::with_capacity(hint.min(MAX_PREALLOC)),
                    None => DynVec::new(),
                };

                while let Some(element) = seq.next_element()? {
                    vec.push(element);
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(DynVecVisitor {
            _marker: PhantomData,
        })
    }
}
