use serde::{Deserialize, Serialize};

/// Invoice header as the extraction/submission endpoints speak it
/// (PascalCase keys, every value a string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceHeader {
    pub order_date: String,
    pub due_date: String,
    pub ship_date: String,
    pub sales_order_number: String,
    pub account_number: String,
    pub subtotal: String,
    pub tax_amt: String,
    pub freight: String,
    pub total_due: String,
}

/// One line item in wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceDetail {
    #[serde(rename = "ProductID")]
    pub product_id: String,
    pub order_qty: String,
    pub unit_price: String,
    pub line_total: String,
}

/// Body of a successful `POST /upload` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub headers: InvoiceHeader,
    pub details: Vec<InvoiceDetail>,
}

/// Body posted to `POST /submit`. Same wire shape as the extraction response.
pub type SubmissionPayload = ExtractionResponse;

/// Invoice as the form edits it (camelCase keys for the webview).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    pub order_date: String,
    pub due_date: String,
    pub ship_date: String,
    pub sales_order_number: String,
    pub account_number: String,
    pub subtotal: String,
    pub tax_amt: String,
    pub freight: String,
    pub total_due: String,
    pub details: Vec<DetailForm>,
}

/// One editable line item row. `productID` keeps its capital ID, matching
/// the form's historical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailForm {
    #[serde(rename = "productID")]
    pub product_id: String,
    pub order_qty: String,
    pub unit_price: String,
    pub line_total: String,
}

/// Header inputs above the details table, in render order.
pub const HEADER_FIELD_ORDER: [&str; 5] = [
    "orderDate",
    "dueDate",
    "shipDate",
    "salesOrderNumber",
    "accountNumber",
];

/// Details table columns, in render order.
pub const DETAIL_COLUMN_ORDER: [&str; 4] = ["productID", "orderQty", "unitPrice", "lineTotal"];

/// Total inputs below the details table, in render order.
pub const TOTAL_FIELD_ORDER: [&str; 4] = ["subtotal", "taxAmt", "freight", "totalDue"];

/// Human label for a form field key.
pub fn field_label(field: &str) -> &'static str {
    match field {
        "orderDate" => "Order Date",
        "dueDate" => "Due Date",
        "shipDate" => "Ship Date",
        "salesOrderNumber" => "Sales Order Number",
        "accountNumber" => "Account Number",
        "subtotal" => "Subtotal",
        "taxAmt" => "Tax Amount",
        "freight" => "Freight",
        "totalDue" => "Total Due",
        "productID" => "Product ID",
        "orderQty" => "Order Quantity",
        "unitPrice" => "Unit Price",
        "lineTotal" => "Line Total",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wire_header_uses_pascal_case_keys() {
        let header = InvoiceHeader {
            order_date: "2024-01-01".into(),
            due_date: "2024-01-15".into(),
            ship_date: "2024-01-02".into(),
            sales_order_number: "SO1".into(),
            account_number: "AC1".into(),
            subtotal: "100.00".into(),
            tax_amt: "8.00".into(),
            freight: "5.00".into(),
            total_due: "113.00".into(),
        };
        let json = serde_json::to_value(&header).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "OrderDate",
            "DueDate",
            "ShipDate",
            "SalesOrderNumber",
            "AccountNumber",
            "Subtotal",
            "TaxAmt",
            "Freight",
            "TotalDue",
        ] {
            assert!(object.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(object.len(), 9);
        assert_eq!(json["OrderDate"], "2024-01-01");
        assert_eq!(json["TaxAmt"], "8.00");
    }

    #[test]
    fn wire_detail_renames_product_id() {
        let detail = InvoiceDetail {
            product_id: "P1".into(),
            order_qty: "2".into(),
            unit_price: "50.00".into(),
            line_total: "100.00".into(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["ProductID"], "P1");
        assert_eq!(json["OrderQty"], "2");
    }

    #[test]
    fn form_detail_keeps_capital_id_in_camel_case() {
        let detail = DetailForm {
            product_id: "P1".into(),
            order_qty: "2".into(),
            unit_price: "50.00".into(),
            line_total: "100.00".into(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["productID"], "P1");
        assert!(json.get("productId").is_none());
    }

    #[test]
    fn extraction_response_parses_wire_json() {
        let raw = r#"{
            "headers": {
                "OrderDate": "2024-01-01", "DueDate": "2024-01-15",
                "ShipDate": "2024-01-02", "SalesOrderNumber": "SO1",
                "AccountNumber": "AC1", "Subtotal": "100.00",
                "TaxAmt": "8.00", "Freight": "5.00", "TotalDue": "113.00"
            },
            "details": [
                {"ProductID": "P1", "OrderQty": "2", "UnitPrice": "50.00", "LineTotal": "100.00"}
            ]
        }"#;
        let parsed: ExtractionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.headers.sales_order_number, "SO1");
        assert_eq!(parsed.details.len(), 1);
        assert_eq!(parsed.details[0].product_id, "P1");
    }

    #[test]
    fn every_ordered_field_has_a_label() {
        for field in HEADER_FIELD_ORDER
            .iter()
            .chain(DETAIL_COLUMN_ORDER.iter())
            .chain(TOTAL_FIELD_ORDER.iter())
        {
            assert!(!field_label(field).is_empty(), "missing label for {field}");
        }
    }
}
