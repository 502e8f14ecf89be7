//! Property tables.
//!
//! Every reportable property is one immutable [`InfoTrait`] row: which
//! parameter to ask for, how to label it, how to render the answer and an
//! optional gate that decides whether the row applies at all. The walkers
//! iterate these tables in order.

mod composite;
mod device;
mod platform;

pub use composite::{amd_topology, nv_compute_capability};
pub use device::{DEVICE_TRAITS, MEMORY_TRAITS, MISC_TRAITS, QUEUE_TRAITS};
pub use platform::PLATFORM_TRAITS;

use crate::domain::{
    DEVICE_MARKERS, Decoded, DeviceType, ExtensionRegistry, Gate, NamedFlags, Needs,
    PLATFORM_MARKERS, VERSION_PREFIX_LEN, parse_ordinal,
};
use crate::format::{bool_str, format_mem, hex_str};
use crate::query::{QueryContext, QueryError, Target};

/// Renderer for properties that need more than one fetch or a custom layout.
pub type CompositeFn<G> =
    fn(&mut QueryContext<'_>, Target, &str, &G) -> Result<String, QueryError>;

/// How a row's raw bytes become display text.
pub enum Render<G: 'static> {
    Str,
    /// String that also yields the version ordinal.
    Version,
    /// String that also yields the extension registry.
    Extensions,
    Uint,
    Ulong,
    Size,
    Bool,
    Hex,
    /// `cl_ulong` byte count.
    Mem,
    /// `size_t` byte count.
    MemSize,
    /// `size_t` array of KiB counts.
    MemKib,
    /// `size_t` array joined by `x`.
    SizeArray,
    /// `cl_bitfield` decoded to flag names.
    Bitfield(fn(u64, &str) -> String),
    /// `cl_device_type`; also yields the type.
    DeviceType,
    /// `cl_uint` enumeration.
    Enum(&'static [(u32, &'static str)]),
    Composite(CompositeFn<G>),
}

impl<G> Render<G> {
    /// Gate input this renderer produces, if any.
    pub const fn feeds(&self) -> Needs {
        match self {
            Self::Version => Needs::VERSION,
            Self::Extensions => Needs::EXTENSIONS,
            Self::DeviceType => Needs::DEVICE_TYPE,
            _ => Needs::empty(),
        }
    }
}

/// One row of a property table.
pub struct InfoTrait<G: 'static> {
    pub param: u32,
    /// Symbolic name, shown in raw mode.
    pub sname: &'static str,
    /// Display name, shown in human mode.
    pub pname: &'static str,
    /// Unit appended to successful values.
    pub suffix: Option<&'static str>,
    pub render: Render<G>,
    pub gate: Option<Gate<G>>,
    /// Fetched in order, displayed later by the walker.
    pub deferred: bool,
}

impl<G> InfoTrait<G> {
    pub const fn new(
        param: u32,
        sname: &'static str,
        pname: &'static str,
        render: Render<G>,
    ) -> Self {
        Self {
            param,
            sname,
            pname,
            suffix: None,
            render,
            gate: None,
            deferred: false,
        }
    }

    /// Whether the gate (if any) lets this row through.
    pub fn applies(&self, gates: &G) -> bool {
        self.gate.as_ref().is_none_or(|gate| gate.allows(gates))
    }
}

/// Row table entry built from a `cl` constant; the symbolic name is the
/// constant's name.
macro_rules! row {
    ($param:ident, $pname:literal, $render:expr $(, suffix = $suffix:literal)? $(, gate = $gate:expr)?) => {
        $crate::traits::InfoTrait {
            suffix: $crate::traits::row!(@opt $($suffix)?),
            gate: $crate::traits::row!(@opt $($gate)?),
            ..$crate::traits::InfoTrait::new($param, stringify!($param), $pname, $render)
        }
    };
    (@opt) => { None };
    (@opt $value:expr) => { Some($value) };
}
pub(crate) use row;

/// A rendered value plus the gate input it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub value: String,
    pub decoded: Option<Decoded>,
}

impl Rendered {
    fn plain(value: String) -> Self {
        Self {
            value,
            decoded: None,
        }
    }
}

/// Fetch and render one row.
///
/// Fails with the query error; the caller decides whether it is fatal.
pub fn render_row<G>(
    ctx: &mut QueryContext<'_>,
    target: Target,
    row: &InfoTrait<G>,
    gates: &G,
    separator: &str,
) -> Result<Rendered, QueryError> {
    let (param, sname) = (row.param, row.sname);
    let mut rendered = match &row.render {
        Render::Str => Rendered::plain(ctx.string(target, param, sname)?),
        Render::Version => {
            let value = ctx.string(target, param, sname)?;
            let ordinal = parse_ordinal(&value, VERSION_PREFIX_LEN);
            Rendered {
                value,
                decoded: Some(Decoded::Version(ordinal)),
            }
        }
        Render::Extensions => {
            let value = ctx.string(target, param, sname)?;
            let markers = match target {
                Target::Platform(_) => PLATFORM_MARKERS,
                _ => DEVICE_MARKERS,
            };
            let registry = ExtensionRegistry::scan(&value, markers);
            Rendered {
                value,
                decoded: Some(Decoded::Extensions(registry)),
            }
        }
        Render::Uint => Rendered::plain(ctx.scalar::<u32>(target, param, sname)?.to_string()),
        Render::Ulong => Rendered::plain(ctx.scalar::<u64>(target, param, sname)?.to_string()),
        Render::Size => Rendered::plain(ctx.scalar::<usize>(target, param, sname)?.to_string()),
        Render::Bool => Rendered::plain(bool_str(ctx.scalar(target, param, sname)?).to_string()),
        Render::Hex => {
            Rendered::plain(hex_str(u64::from(ctx.scalar::<u32>(target, param, sname)?)))
        }
        Render::Mem => Rendered::plain(format_mem(ctx.scalar(target, param, sname)?)),
        Render::MemSize => {
            Rendered::plain(format_mem(ctx.scalar::<usize>(target, param, sname)? as u64))
        }
        Render::MemKib => {
            let values = ctx.array::<usize>(target, param, sname)?;
            let parts: Vec<String> = values
                .into_iter()
                .map(|kib| format_mem((kib as u64).saturating_mul(1024)))
                .collect();
            Rendered::plain(parts.join(separator))
        }
        Render::SizeArray => {
            let values = ctx.array::<usize>(target, param, sname)?;
            let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
            Rendered::plain(parts.join("x"))
        }
        Render::Bitfield(describe) => {
            Rendered::plain(describe(ctx.scalar(target, param, sname)?, separator))
        }
        Render::DeviceType => {
            let device_type = DeviceType::from_bits_retain(ctx.scalar(target, param, sname)?);
            Rendered {
                value: device_type.describe(separator),
                decoded: Some(Decoded::DeviceType(device_type)),
            }
        }
        Render::Enum(names) => {
            let code: u32 = ctx.scalar(target, param, sname)?;
            let value = names
                .iter()
                .find(|(known, _)| *known == code)
                .map_or_else(|| format!("<unknown ({code:#x})>"), |(_, name)| (*name).to_string());
            Rendered::plain(value)
        }
        Render::Composite(composite) => {
            Rendered::plain(composite(ctx, target, separator, gates)?)
        }
    };

    if let Some(suffix) = row.suffix {
        rendered.value.push(' ');
        rendered.value.push_str(suffix);
    }
    Ok(rendered)
}
