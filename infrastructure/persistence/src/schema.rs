//! Catalog tables and the relation between them, declared as data.
//!
//! The repository is built from a [`CatalogSchema`] at startup instead of
//! hard-coding table names in every statement. The SQL migrations create
//! the same layout.

/// A table, the alias used for it in queries, and its primary key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub alias: &'static str,
    pub primary_key: &'static str,
}

/// How many rows on each side of a relation take part in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Many rows of the owning table point at one row of the target.
    ManyToOne,
    OneToOne,
}

/// A foreign key from `from` to the primary key of `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub from: Table,
    pub foreign_key: &'static str,
    pub to: Table,
    pub cardinality: Cardinality,
    pub nullable: bool,
}

impl Relation {
    /// Join that attaches the referenced row to each owning row.
    ///
    /// A nullable key keeps owning rows without a match.
    pub fn join_clause(&self) -> String {
        let kind = if self.nullable { "LEFT JOIN" } else { "JOIN" };
        format!(
            "{kind} {to} {to_alias} ON {to_alias}.{pk} = {from_alias}.{fk}",
            to = self.to.name,
            to_alias = self.to.alias,
            pk = self.to.primary_key,
            from_alias = self.from.alias,
            fk = self.foreign_key,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSchema {
    pub products: Table,
    pub categories: Table,
    pub product_category: Relation,
}

impl Default for CatalogSchema {
    fn default() -> Self {
        let products = Table {
            name: "products",
            alias: "p",
            primary_key: "uuid",
        };
        let categories = Table {
            name: "product_categories",
            alias: "c",
            primary_key: "uuid",
        };
        Self {
            products,
            categories,
            product_category: Relation {
                from: products,
                foreign_key: "product_category_uuid",
                to: categories,
                cardinality: Cardinality::ManyToOne,
                nullable: true,
            },
        }
    }
}
