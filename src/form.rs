//! The invoice form session: the single in-memory record the user edits.
//!
//! Two implicit states: Empty (nothing extracted yet) and Loaded. The only
//! way in is a successful extraction; a later extraction replaces the form.

use crate::error::FormError;
use crate::types::InvoiceForm;

/// The nine editable header fields, named by their form (camelCase) keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    OrderDate,
    DueDate,
    ShipDate,
    SalesOrderNumber,
    AccountNumber,
    Subtotal,
    TaxAmt,
    Freight,
    TotalDue,
}

impl HeaderField {
    pub fn parse(name: &str) -> Result<Self, FormError> {
        match name {
            "orderDate" => Ok(HeaderField::OrderDate),
            "dueDate" => Ok(HeaderField::DueDate),
            "shipDate" => Ok(HeaderField::ShipDate),
            "salesOrderNumber" => Ok(HeaderField::SalesOrderNumber),
            "accountNumber" => Ok(HeaderField::AccountNumber),
            "subtotal" => Ok(HeaderField::Subtotal),
            "taxAmt" => Ok(HeaderField::TaxAmt),
            "freight" => Ok(HeaderField::Freight),
            "totalDue" => Ok(HeaderField::TotalDue),
            other => Err(FormError::InvalidEditTarget(format!(
                "no header field named {other}"
            ))),
        }
    }
}

/// The four editable columns of a detail row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    ProductId,
    OrderQty,
    UnitPrice,
    LineTotal,
}

impl DetailField {
    pub fn parse(name: &str) -> Result<Self, FormError> {
        match name {
            "productID" => Ok(DetailField::ProductId),
            "orderQty" => Ok(DetailField::OrderQty),
            "unitPrice" => Ok(DetailField::UnitPrice),
            "lineTotal" => Ok(DetailField::LineTotal),
            other => Err(FormError::InvalidEditTarget(format!(
                "no detail field named {other}"
            ))),
        }
    }
}

#[derive(Debug, Default)]
pub struct InvoiceSession {
    document_path: Option<String>,
    form: Option<InvoiceForm>,
}

impl InvoiceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the chosen document path. No validation of type or size; a
    /// previously loaded form stays untouched until the next extraction.
    pub fn select_document(&mut self, path: String) {
        self.document_path = Some(path);
    }

    pub fn document_path(&self) -> Result<&str, FormError> {
        self.document_path
            .as_deref()
            .ok_or(FormError::NoDocumentSelected)
    }

    /// Install an extraction result, replacing whatever was loaded before.
    pub fn replace_form(&mut self, form: InvoiceForm) {
        self.form = Some(form);
    }

    pub fn form(&self) -> Option<&InvoiceForm> {
        self.form.as_ref()
    }

    pub fn loaded_form(&self) -> Result<&InvoiceForm, FormError> {
        self.form.as_ref().ok_or(FormError::NoInvoiceLoaded)
    }

    /// Set one named header field, leaving every other field and the details
    /// sequence untouched. The field name is validated before any change.
    pub fn edit_header_field(&mut self, field: &str, value: String) -> Result<(), FormError> {
        let field = HeaderField::parse(field)?;
        let form = self.form.as_mut().ok_or(FormError::NoInvoiceLoaded)?;
        let slot = match field {
            HeaderField::OrderDate => &mut form.order_date,
            HeaderField::DueDate => &mut form.due_date,
            HeaderField::ShipDate => &mut form.ship_date,
            HeaderField::SalesOrderNumber => &mut form.sales_order_number,
            HeaderField::AccountNumber => &mut form.account_number,
            HeaderField::Subtotal => &mut form.subtotal,
            HeaderField::TaxAmt => &mut form.tax_amt,
            HeaderField::Freight => &mut form.freight,
            HeaderField::TotalDue => &mut form.total_due,
        };
        *slot = value;
        Ok(())
    }

    /// Set one named field of the detail row at `index`. The details vector
    /// is rebuilt with only the targeted row replaced, so row order is stable
    /// and no row aliases the previous vector when the webview re-renders.
    pub fn edit_detail_field(
        &mut self,
        index: usize,
        field: &str,
        value: String,
    ) -> Result<(), FormError> {
        let field = DetailField::parse(field)?;
        let form = self.form.as_mut().ok_or(FormError::NoInvoiceLoaded)?;
        if index >= form.details.len() {
            return Err(FormError::InvalidEditTarget(format!(
                "detail index {index} out of bounds for {} row(s)",
                form.details.len()
            )));
        }
        let rebuilt: Vec<_> = form
            .details
            .iter()
            .enumerate()
            .map(|(row, detail)| {
                if row != index {
                    return detail.clone();
                }
                let mut updated = detail.clone();
                match field {
                    DetailField::ProductId => updated.product_id = value.clone(),
                    DetailField::OrderQty => updated.order_qty = value.clone(),
                    DetailField::UnitPrice => updated.unit_price = value.clone(),
                    DetailField::LineTotal => updated.line_total = value.clone(),
                }
                updated
            })
            .collect();
        form.details = rebuilt;
        Ok(())
    }
}
