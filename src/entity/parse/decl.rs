// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Top-level declaration table.
//!
//! Maps every named item at the root of a parsed file to its kind. Nested
//! modules are recorded as [`Declaration::Module`] but their contents are not
//! indexed.

use std::collections::HashMap;

use syn::{File, Item, ItemStruct};

/// Kind of a top-level declaration.
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    /// `struct`: the only kind fields can be extracted from.
    Struct(&'a ItemStruct),
    /// `enum`
    Enum,
    /// `union`
    Union,
    /// `type` alias
    Alias,
    /// `trait` or trait alias
    Trait,
    /// `fn`
    Function,
    /// `const`
    Const,
    /// `static`
    Static,
    /// `mod`
    Module
}

impl Declaration<'_> {
    /// Human readable kind, used in type mismatch errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Struct(_) => "struct",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Alias => "type alias",
            Self::Trait => "trait",
            Self::Function => "function",
            Self::Const => "const",
            Self::Static => "static",
            Self::Module => "module"
        }
    }
}

/// Declarations of a file, keyed by identifier.
#[derive(Debug, Default)]
pub struct DeclarationTable<'a> {
    entries: HashMap<String, Declaration<'a>>
}

impl<'a> DeclarationTable<'a> {
    /// Index the top-level items of `file`.
    ///
    /// On duplicate names the first declaration wins; rustc rejects such
    /// files anyway.
    pub fn build(file: &'a File) -> Self {
        let mut entries = HashMap::new();
        for item in &file.items {
            if let Some((ident, decl)) = declaration(item) {
                entries.entry(ident).or_insert(decl);
            }
        }
        Self { entries }
    }

    /// Look up a declaration by identifier.
    pub fn get(&self, name: &str) -> Option<Declaration<'a>> {
        self.entries.get(name).copied()
    }

    /// Number of indexed declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn declaration(item: &Item) -> Option<(String, Declaration<'_>)> {
    let (ident, decl) = match item {
        Item::Struct(s) => (&s.ident, Declaration::Struct(s)),
        Item::Enum(e) => (&e.ident, Declaration::Enum),
        Item::Union(u) => (&u.ident, Declaration::Union),
        Item::Type(t) => (&t.ident, Declaration::Alias),
        Item::Trait(t) => (&t.ident, Declaration::Trait),
        Item::TraitAlias(t) => (&t.ident, Declaration::Trait),
        Item::Fn(f) => (&f.sig.ident, Declaration::Function),
        Item::Const(c) => (&c.ident, Declaration::Const),
        Item::Static(s) => (&s.ident, Declaration::Static),
        Item::Mod(m) => (&m.ident, Declaration::Module),
        _ => return None
    };
    Some((ident.to_string(), decl))
}
