//! Unit tags the numeric scanner checks after the `*` of a value.

/// Compile-time unit tag. An empty tag means the value carries no unit.
pub trait Unit: 'static {
    const TAG: &'static str;
}

macro_rules! units {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
            pub struct $name;

            impl Unit for $name {
                const TAG: &'static str = $tag;
            }
        )*

        /// Every tag in use, in declaration order.
        pub const ALL: &[&str] = &[$($tag),*];
    };
}

units! {
    NoUnit => "",
    KWh => "kWh",
    Wh => "Wh",
    KW => "kW",
    W => "W",
    V => "V",
    MV => "mV",
    A => "A",
    MA => "mA",
    M3 => "m3",
    Dm3 => "dm3",
    GJ => "GJ",
    MJ => "MJ",
    Kvar => "kvar",
    Kvarh => "kvarh",
    Hz => "Hz",
}
