//! Typed P1 data items.
//!
//! Every catalog entry is a zero-sized [`Entry`] type that fixes the
//! item's name, OBIS id and [`Variant`]. [`Descriptor<E>`] adds the storage
//! and presence flag, so each entry ends up as its own concrete type.
//! Generic code walks a set of descriptors with a [`Visitor`], which is
//! monomorphized per entry instead of going through a trait object.

use core::fmt;
use core::marker::PhantomData;

use log::{debug, trace};

use crate::obis_utils::ObisId;
use crate::parser::{ParseResult, Parsed};

pub mod catalog;
pub mod dump;
pub mod structs;
pub mod units;
pub mod variants;

pub use catalog::AllFields;
pub use dump::Dump;
pub use structs::{FixedValue, TimestampedFixedValue};
pub use variants::{
    FixedField, IntField, RawField, StringField, TimestampField, TimestampedFixedField, Variant,
};

/// Compile-time identity of one data item.
pub trait Entry: 'static {
    const NAME: &'static str;
    const ID: ObisId;
    type Variant: Variant;
}

pub type ValueOf<E> = <<E as Entry>::Variant as Variant>::Value;

/// Storage and presence flag of the data item `E`.
///
/// A descriptor starts out absent and only becomes present through a
/// successful [`decode`](Self::decode). A failed decode leaves it exactly
/// as it was.
pub struct Descriptor<E: Entry> {
    value: ValueOf<E>,
    present: bool,
    _entry: PhantomData<E>,
}

impl<E: Entry> Descriptor<E> {
    pub const NAME: &'static str = E::NAME;
    pub const ID: ObisId = E::ID;

    pub fn new() -> Self {
        Self {
            value: Default::default(),
            present: false,
            _entry: PhantomData,
        }
    }

    /// Decode the value span of a line carrying this item.
    pub fn decode(&mut self, span: &str) -> ParseResult<()> {
        match <E::Variant as Variant>::parse(span) {
            Ok(res) => {
                trace!("{} ({}) = {}", E::NAME, E::ID, res.value);
                self.value = res.value;
                self.present = true;
                Ok(Parsed { value: (), next: res.next })
            }
            Err(e) => {
                debug!("Failed to decode {} ({}) from '{}': {}", E::NAME, E::ID, span, e);
                Err(e)
            }
        }
    }

    /// The decoded value, if the item was present.
    pub fn value(&self) -> Option<&ValueOf<E>> {
        if self.present {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Stored value regardless of presence.
    pub fn val(&self) -> &ValueOf<E> {
        &self.value
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn reset(&mut self) {
        self.value = Default::default();
        self.present = false;
    }

    pub fn name(&self) -> &'static str {
        E::NAME
    }

    pub fn id(&self) -> ObisId {
        E::ID
    }

    pub fn unit(&self) -> &'static str {
        <E::Variant as Variant>::UNIT
    }

    pub fn int_unit(&self) -> &'static str {
        <E::Variant as Variant>::INT_UNIT
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit(self);
    }

    pub fn accept_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
        visitor.visit_mut(self);
    }
}

impl<E: Entry> Default for Descriptor<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> Clone for Descriptor<E> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            present: self.present,
            _entry: PhantomData,
        }
    }
}

impl<E: Entry> fmt::Debug for Descriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(E::NAME)
            .field("id", &E::ID)
            .field("present", &self.present)
            .field("value", &self.value)
            .finish()
    }
}

/// Operation applied to every descriptor of a [`FieldSet`].
pub trait Visitor {
    fn visit<E: Entry>(&mut self, field: &Descriptor<E>);
}

pub trait VisitorMut {
    fn visit_mut<E: Entry>(&mut self, field: &mut Descriptor<E>);
}

/// A struct of descriptors, usually declared with [`field_set!`](crate::field_set).
pub trait FieldSet {
    /// Visit every member in declaration order.
    fn apply<V: Visitor>(&self, visitor: &mut V);

    fn apply_mut<V: VisitorMut>(&mut self, visitor: &mut V);

    /// Mark every member absent, ready for the next telegram.
    fn reset(&mut self) {
        self.apply_mut(&mut Reset);
    }
}

struct Reset;

impl VisitorMut for Reset {
    fn visit_mut<E: Entry>(&mut self, field: &mut Descriptor<E>) {
        field.reset();
    }
}

/// Declare a struct holding one [`Descriptor`] per listed entry and
/// implement [`FieldSet`] for it.
///
/// ```
/// use dsmr_fields::field_set;
/// use dsmr_fields::fields::catalog::{EnergyDelivered, Timestamp};
///
/// field_set! {
///     pub struct Minimal {
///         timestamp: Timestamp,
///         energy_delivered: EnergyDelivered,
///     }
/// }
///
/// let mut data = Minimal::default();
/// data.energy_delivered.decode("(000441.879*kWh)").unwrap();
/// assert_eq!(data.energy_delivered.value().unwrap().int_val(), 441_879);
/// ```
#[macro_export]
macro_rules! field_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $entry:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::fields::Descriptor<$entry>,
            )*
        }

        impl $crate::fields::FieldSet for $name {
            fn apply<V: $crate::fields::Visitor>(&self, visitor: &mut V) {
                $(visitor.visit(&self.$field);)*
            }

            fn apply_mut<V: $crate::fields::VisitorMut>(&mut self, visitor: &mut V) {
                $(visitor.visit_mut(&mut self.$field);)*
            }
        }
    };
}
