// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lazy_static::lazy_static;
use std::sync::Mutex;
use string_interner::StringInterner;
use string_interner::backend::StringBackend;
use string_interner::symbol::SymbolU32;

/// A name that has been stored once in the global interner.
///
/// Kernel modules repeat the same identifiers (variables, blocks, arrays,
/// functions) in many places; an interned name is a `Copy` index instead of an
/// owned `String`. Interned names live until the process exits, so only intern
/// names that end up in the IR.
///
/// Build one with `let n: InternedString = "x".into();` or `"x".intern()`.
#[derive(Clone, Hash, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct InternedString(SymbolU32);

lazy_static! {
    static ref NAMES: Mutex<StringInterner<StringBackend>> =
        Mutex::new(StringInterner::default());
}

impl InternedString {
    /// Run `f` on the backing `&str`. The interner lock is held while `f` runs.
    pub fn map<T, F: FnOnce(&str) -> T>(&self, f: F) -> T {
        let names = NAMES.lock().unwrap();
        f(names.resolve(self.0).unwrap())
    }

    /// The interned name for `s`, if `s` has been interned. Never interns `s` itself.
    pub fn lookup(s: &str) -> Option<InternedString> {
        NAMES.lock().unwrap().get(s).map(InternedString)
    }

    pub fn is_empty(&self) -> bool {
        self.map(str::is_empty)
    }

    pub fn len(&self) -> usize {
        self.map(str::len)
    }
}

impl std::fmt::Display for InternedString {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.map(str::to_owned);
        write!(fmt, "{s}")
    }
}

/// Print the name rather than the interner index.
impl std::fmt::Debug for InternedString {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.map(str::to_owned);
        write!(fmt, "{s:?}")
    }
}

impl<T> From<T> for InternedString
where
    T: AsRef<str>,
{
    fn from(s: T) -> InternedString {
        InternedString(NAMES.lock().unwrap().get_or_intern(s))
    }
}

impl<T> PartialEq<T> for InternedString
where
    T: AsRef<str>,
{
    fn eq(&self, other: &T) -> bool {
        self.map(|s| s == other.as_ref())
    }
}

impl serde::Serialize for InternedString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map(|s| serializer.serialize_str(s))
    }
}

pub trait InternString {
    fn intern(self) -> InternedString;
}

impl<T> InternString for T
where
    T: Into<InternedString>,
{
    fn intern(self) -> InternedString {
        self.into()
    }
}
