use serde::{Deserialize, Serialize};

use billforge_core::{Aggregate, Decimal, DomainError, DomainResult, InvoiceId, Money};
use billforge_parties::Party;

use crate::line_item::LineItem;

/// Aggregate root: Invoice.
///
/// Every edit returns a new invoice; `total_amount` is private and only ever
/// recomputed from the line items when they change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InvoiceRecord")]
pub struct Invoice {
    id: Option<InvoiceId>,
    created_by: Party,
    line_items: Vec<LineItem>,
    total_amount: Money,
}

/// Deserialization shape. Any incoming `total_amount` is dropped and
/// recomputed from the line items; an overflowing total is rejected.
#[derive(Deserialize)]
struct InvoiceRecord {
    #[serde(default)]
    id: Option<InvoiceId>,
    created_by: Party,
    #[serde(default)]
    line_items: Vec<LineItem>,
}

impl TryFrom<InvoiceRecord> for Invoice {
    type Error = DomainError;

    fn try_from(record: InvoiceRecord) -> Result<Self, Self::Error> {
        Invoice::try_from_parts(record.id, record.created_by, record.line_items)
    }
}

impl Invoice {
    /// New invoice owned by `owner`: no line items, zero total, no identity.
    pub fn create(owner: Party) -> Self {
        Self {
            id: None,
            created_by: owner,
            line_items: Vec::new(),
            total_amount: Decimal::ZERO,
        }
    }

    /// Assemble an invoice from stored parts. The total is recomputed.
    ///
    /// # Panics
    ///
    /// Panics if the total overflows `Decimal`; see [`Invoice::try_from_parts`].
    pub fn from_parts(id: Option<InvoiceId>, created_by: Party, line_items: Vec<LineItem>) -> Self {
        Self::create(created_by).with_line_items(line_items).with_id_opt(id)
    }

    /// Like [`Invoice::from_parts`], but an overflowing line or total is a
    /// validation error naming the offending line.
    pub fn try_from_parts(
        id: Option<InvoiceId>,
        created_by: Party,
        line_items: Vec<LineItem>,
    ) -> DomainResult<Self> {
        Ok(Self::create(created_by)
            .try_with_line_items(line_items)?
            .with_id_opt(id))
    }

    pub fn id(&self) -> Option<InvoiceId> {
        self.id
    }

    pub fn created_by(&self) -> &Party {
        &self.created_by
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Same invoice, now carrying the identity assigned by a store.
    pub fn with_id(&self, id: InvoiceId) -> Self {
        self.clone().with_id_opt(Some(id))
    }

    /// Append `item` at the end and recompute the total.
    ///
    /// # Panics
    ///
    /// Panics if the new total overflows `Decimal`; see
    /// [`Invoice::try_add_line_item`].
    pub fn add_line_item(&self, item: LineItem) -> Self {
        let mut line_items = self.line_items.clone();
        line_items.push(item);
        self.clone().with_line_items(line_items)
    }

    /// Like [`Invoice::add_line_item`], but an overflowing total is a
    /// validation error.
    pub fn try_add_line_item(&self, item: LineItem) -> DomainResult<Self> {
        let mut line_items = self.line_items.clone();
        line_items.push(item);
        self.clone().try_with_line_items(line_items)
    }

    /// Remove the line at `index` and recompute the total.
    ///
    /// Fails on a missing position or an overflowing running total.
    pub fn remove_line_item(&self, index: usize) -> DomainResult<Self> {
        self.ensure_index(index)?;
        let mut line_items = self.line_items.clone();
        line_items.remove(index);
        self.clone().try_with_line_items(line_items)
    }

    /// Replace the line at `index` with `item` and recompute the total.
    ///
    /// Fails on a missing position or an overflowing total.
    pub fn change_line_item(&self, index: usize, item: LineItem) -> DomainResult<Self> {
        self.ensure_index(index)?;
        let mut line_items = self.line_items.clone();
        line_items[index] = item;
        self.clone().try_with_line_items(line_items)
    }

    fn ensure_index(&self, index: usize) -> DomainResult<()> {
        if index >= self.line_items.len() {
            return Err(DomainError::index_out_of_range(index, self.line_items.len()));
        }
        Ok(())
    }

    fn with_id_opt(mut self, id: Option<InvoiceId>) -> Self {
        self.id = id;
        self
    }

    // `with_line_items` and `try_with_line_items` are the only writers of
    // `total_amount`.
    fn with_line_items(mut self, line_items: Vec<LineItem>) -> Self {
        self.line_items = line_items;
        self.total_amount = calculate_total(&self);
        self
    }

    fn try_with_line_items(mut self, line_items: Vec<LineItem>) -> DomainResult<Self> {
        self.total_amount = checked_total(&line_items)?;
        self.line_items = line_items;
        Ok(self)
    }
}

/// Sum of every line total, folded left from zero in line order.
///
/// # Panics
///
/// Panics if a line total or the sum overflows `Decimal`; see
/// [`checked_total`].
pub fn calculate_total(invoice: &Invoice) -> Money {
    invoice
        .line_items
        .iter()
        .map(LineItem::line_total)
        .fold(Decimal::ZERO, |acc, line_total| acc + line_total)
}

/// Overflow-checked sum of line totals, in line order.
///
/// The error names the first line whose amount (or whose addition to the
/// running total) does not fit, e.g. `line_items[1].rate: amount overflows`.
pub fn checked_total(line_items: &[LineItem]) -> DomainResult<Money> {
    line_items
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |acc, (i, item)| {
            item.checked_line_total()
                .and_then(|line_total| acc.checked_add(line_total))
                .ok_or_else(|| DomainError::validation(format!("line_items[{i}].rate: amount overflows")))
        })
}

/// Command: AddLineItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLineItem {
    pub item: LineItem,
}

/// Command: RemoveLineItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLineItem {
    pub index: usize,
}

/// Command: ChangeLineItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLineItem {
    pub index: usize,
    pub item: LineItem,
}

/// Edits a presentation layer can route to an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InvoiceCommand {
    AddLineItem(AddLineItem),
    RemoveLineItem(RemoveLineItem),
    ChangeLineItem(ChangeLineItem),
}

impl Aggregate for Invoice {
    type Command = InvoiceCommand;
    type Error = DomainError;

    fn handle(&self, command: &Self::Command) -> Result<Self, Self::Error> {
        match command {
            InvoiceCommand::AddLineItem(cmd) => self.try_add_line_item(cmd.item.clone()),
            InvoiceCommand::RemoveLineItem(cmd) => self.remove_line_item(cmd.index),
            InvoiceCommand::ChangeLineItem(cmd) => self.change_line_item(cmd.index, cmd.item.clone()),
        }
    }
}
