//! Capability trait that lets statically typed data be viewed as a [`Value`].

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use crate::value::Value;

pub trait Inspect {
    fn inspect(&self) -> Value;
}

impl Inspect for Value {
    fn inspect(&self) -> Value {
        self.clone()
    }
}

impl Inspect for str {
    fn inspect(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl Inspect for String {
    fn inspect(&self) -> Value {
        Value::Text(self.clone())
    }
}

macro_rules! inspect_as {
    ($variant:ident, $target:ty; $($t:ty),*) => {
        $(impl Inspect for $t {
            fn inspect(&self) -> Value {
                Value::$variant(*self as $target)
            }
        })*
    };
}

inspect_as!(Int, i64; i8, i16, i32, i64, isize);
inspect_as!(Uint, u64; u8, u16, u32, u64, usize);
inspect_as!(Float, f64; f32, f64);

impl Inspect for bool {
    fn inspect(&self) -> Value {
        Value::Bool(*self)
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self) -> Value {
        (**self).inspect()
    }
}

/// `None` is the null reference; `Some` is a present reference to the payload.
impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> Value {
        Value::Ref(self.as_ref().map(|v| Box::new(v.inspect())))
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn inspect(&self) -> Value {
        Value::Ref(Some(Box::new((**self).inspect())))
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn inspect(&self) -> Value {
        Value::Ref(Some(Box::new((**self).inspect())))
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn inspect(&self) -> Value {
        Value::Ref(Some(Box::new((**self).inspect())))
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> Value {
        Value::seq(self.iter().map(Inspect::inspect))
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> Value {
        self.as_slice().inspect()
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> Value {
        Value::Map(Some(
            self.iter().map(|(k, v)| (k.inspect(), v.inspect())).collect(),
        ))
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> Value {
        Value::Map(Some(
            self.iter().map(|(k, v)| (k.inspect(), v.inspect())).collect(),
        ))
    }
}
