use crate::{
    arena::{Arena, Handle},
    error::{AllocError, RuntimeError},
};

/// Maximum number of variables a table can hold, seeded constants included.
pub const MAX_SYMBOLS: usize = 128;

/// One variable binding.
///
/// The name handle points into the table's own arena, a persistent copy
/// made on first write, decoupled from the transient source line the name
/// was lexed from.
struct Symbol {
    name: Handle<String>,
    value: f64,
}

/// A bounded mapping from variable names to `f64` values.
///
/// Lookup and insert are linear scans; the table is small and bounded by
/// [`MAX_SYMBOLS`], and no ordering is guaranteed beyond insertion order.
/// Created once per session, pre-seeded with `pi` and `e`, and alive until
/// the session is dropped.
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    names: Arena<String>,
}

impl SymbolTable {
    /// Creates a table pre-seeded with the named constants `pi` and `e`.
    ///
    /// # Errors
    /// `AllocError` if the name arena cannot be created.
    pub fn new() -> Result<Self, AllocError> {
        let mut table = Self {
            symbols: Vec::new(),
            names: Arena::with_capacity(MAX_SYMBOLS)?,
        };

        for (name, value) in [("pi", std::f64::consts::PI), ("e", std::f64::consts::E)] {
            table.set(name, value).map_err(|_| AllocError::Exhausted {
                capacity: MAX_SYMBOLS,
            })?;
        }

        Ok(table)
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        let names = &self.names;
        self.symbols
            .iter()
            .find(|symbol| names.get(symbol.name).is_some_and(|n| n == name))
            .map(|symbol| symbol.value)
    }

    /// Inserts or overwrites a variable.
    ///
    /// The first write of a name copies it into the table's arena; later
    /// writes only update the value in place.
    ///
    /// # Errors
    /// `RuntimeError::SymbolTableFull` when the table cannot take another
    /// name; the insert is dropped and existing entries are untouched.
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), RuntimeError> {
        let names = &self.names;
        if let Some(symbol) = self
            .symbols
            .iter_mut()
            .find(|symbol| names.get(symbol.name).is_some_and(|n| n == name))
        {
            symbol.value = value;
            return Ok(());
        }

        if self.symbols.len() >= MAX_SYMBOLS {
            return Err(RuntimeError::SymbolTableFull {
                capacity: MAX_SYMBOLS,
            });
        }

        let handle = self
            .names
            .alloc(name.to_string())
            .map_err(|_| RuntimeError::SymbolTableFull {
                capacity: MAX_SYMBOLS,
            })?;

        self.symbols.push(Symbol {
            name: handle,
            value,
        });
        Ok(())
    }

    /// Read-only snapshot of the table, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.symbols.iter().filter_map(|symbol| {
            self.names
                .get(symbol.name)
                .map(|name| (name.as_str(), symbol.value))
        })
    }

    /// Number of bindings, seeded constants included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
