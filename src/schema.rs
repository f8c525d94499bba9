diesel::table! {
    products (id) {
        id -> Uuid,
        name -> Varchar,
        category -> Varchar,
        price -> Numeric,
        stock -> Int4,
    }
}

diesel::table! {
    orders (id) {
        id -> Uuid,
        customer_id -> Uuid,
        #[max_length = 50]
        status -> Varchar,
        total_amount -> Numeric,
        order_date -> Timestamptz,
    }
}

diesel::table! {
    order_lines (id) {
        id -> Uuid,
        order_id -> Uuid,
        line_no -> Int4,
        product_id -> Uuid,
        quantity -> Int4,
        price_at_purchase -> Numeric,
    }
}

diesel::joinable!(order_lines -> orders (order_id));

diesel::allow_tables_to_appear_in_same_query!(order_lines, orders, products,);
