//! 产品列表页渲染
//!
//! `render` 只依赖产品序列，不依赖 HTTP 或存储。模板以 `.html` 命名，
//! minijinja 据此对输出的文本自动做 HTML 转义。

use minijinja::{context, Environment};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::model::Product;
use crate::core::error::CoreError;

/// 无产品时显示的提示
pub const EMPTY_NOTICE: &str = "No hay productos disponibles.";

const TEMPLATE_NAME: &str = "productos.html";
const TEMPLATE: &str = include_str!("../../../templates/productos.html");

/// 模板中的一行，价格已格式化
#[derive(Serialize)]
struct ProductRow<'a> {
    id: i64,
    name: &'a str,
    description: &'a str,
    price: String,
}

impl<'a> From<&'a Product> for ProductRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id,
            name: &product.name,
            description: &product.description,
            price: format_price(product.price),
        }
    }
}

/// 渲染产品列表页
pub fn render(products: &[Product]) -> Result<String, CoreError> {
    let rows: Vec<ProductRow<'_>> = products.iter().map(ProductRow::from).collect();

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(template_error)?;

    env.get_template(TEMPLATE_NAME)
        .and_then(|template| {
            template.render(context! {
                productos => rows,
                empty_notice => EMPTY_NOTICE,
            })
        })
        .map_err(template_error)
}

fn template_error(e: minijinja::Error) -> CoreError {
    CoreError::InternalServerError(format!("模板渲染失败: {}", e))
}

/// 价格格式：`$` 前缀、两位小数、无千分位，超出两位时四舍五入（远离零）
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: i64, name: &str, price: Decimal) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("descripción de {}", name),
            price,
        }
    }

    #[test]
    fn test_empty_list_renders_notice_without_table() {
        let html = render(&[]).unwrap();
        assert!(html.contains("<p>No hay productos disponibles.</p>"));
        assert!(!html.contains("<table"));
        assert!(html.contains("<h1>Lista de Productos</h1>"));
    }

    #[test]
    fn test_one_row_per_product_in_input_order() {
        let products = vec![
            product(7, "Zeta", dec!(3)),
            product(2, "Alfa", dec!(1)),
            product(5, "Beta", dec!(2)),
        ];
        let html = render(&products).unwrap();

        assert!(!html.contains(EMPTY_NOTICE));
        assert_eq!(html.matches("<table>").count(), 1);
        assert_eq!(html.matches("<td class=\"precio\">").count(), 3);
        // 表头一行 + 每个产品一行
        assert_eq!(html.matches("<tr>").count(), 4);
        assert_eq!(html.matches("<th>").count(), 4);

        let zeta = html.find("<td>Zeta</td>").unwrap();
        let alfa = html.find("<td>Alfa</td>").unwrap();
        let beta = html.find("<td>Beta</td>").unwrap();
        assert!(zeta < alfa && alfa < beta);
        assert!(html.contains("<td>7</td>"));
    }

    #[test]
    fn test_price_cells_have_two_decimals() {
        let html = render(&[product(1, "Laptop Dell", dec!(1200.00))]).unwrap();
        assert!(html.contains("<td class=\"precio\">$1200.00</td>"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(0)), "$0.00");
        assert_eq!(format_price(dec!(1200)), "$1200.00");
        assert_eq!(format_price(dec!(450.5)), "$450.50");
        assert_eq!(format_price(dec!(45.99)), "$45.99");
        assert_eq!(format_price(dec!(45.999)), "$46.00");
        assert_eq!(format_price(dec!(0.005)), "$0.01");
        assert_eq!(format_price(dec!(1234567.891)), "$1234567.89");
    }

    #[test]
    fn test_text_is_escaped() {
        let mut p = product(1, "<script>alert('x')<script>", dec!(1));
        p.description = "A & B".to_string();
        let html = render(&[p]).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;script&gt;"));
        assert!(html.contains("<td>A &amp; B</td>"));
    }

    #[test]
    fn test_quote_in_name_is_escaped() {
        let html = render(&[product(4, "Monitor LG 27\"", dec!(450.50))]).unwrap();
        assert!(html.contains("<td>Monitor LG 27&quot;</td>"));
    }
}
