//! Wire shape <-> form shape conversion.
//!
//! The endpoints speak PascalCase, the form speaks camelCase. The mapping is
//! a pure field renaming: two record types and two inverse functions, so a
//! round trip reproduces the input exactly, detail order included.

use crate::types::{DetailForm, InvoiceDetail, InvoiceForm, InvoiceHeader, SubmissionPayload};

/// Extraction result (wire shape) -> editable form.
pub fn to_form(headers: InvoiceHeader, details: Vec<InvoiceDetail>) -> InvoiceForm {
    InvoiceForm {
        order_date: headers.order_date,
        due_date: headers.due_date,
        ship_date: headers.ship_date,
        sales_order_number: headers.sales_order_number,
        account_number: headers.account_number,
        subtotal: headers.subtotal,
        tax_amt: headers.tax_amt,
        freight: headers.freight,
        total_due: headers.total_due,
        details: details
            .into_iter()
            .map(|detail| DetailForm {
                product_id: detail.product_id,
                order_qty: detail.order_qty,
                unit_price: detail.unit_price,
                line_total: detail.line_total,
            })
            .collect(),
    }
}

/// Editable form -> wire shape for submission.
pub fn to_wire(form: &InvoiceForm) -> SubmissionPayload {
    SubmissionPayload {
        headers: InvoiceHeader {
            order_date: form.order_date.clone(),
            due_date: form.due_date.clone(),
            ship_date: form.ship_date.clone(),
            sales_order_number: form.sales_order_number.clone(),
            account_number: form.account_number.clone(),
            subtotal: form.subtotal.clone(),
            tax_amt: form.tax_amt.clone(),
            freight: form.freight.clone(),
            total_due: form.total_due.clone(),
        },
        details: form
            .details
            .iter()
            .map(|detail| InvoiceDetail {
                product_id: detail.product_id.clone(),
                order_qty: detail.order_qty.clone(),
                unit_price: detail.unit_price.clone(),
                line_total: detail.line_total.clone(),
            })
            .collect(),
    }
}
