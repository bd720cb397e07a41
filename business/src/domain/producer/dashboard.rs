use bigdecimal::BigDecimal;
use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};
use serde::Serialize;

use super::model::{ProducerProduct, ProducerProfile, ProductStatus};
use crate::domain::order::model::{Order, OrderStatus};
use crate::domain::shared::money;

const RECENT_ORDERS: usize = 5;
const CHART_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesPoint {
    pub label: &'static str,
    pub total: BigDecimal,
}

/// Producer home page figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Delivered orders since the first day of the current month.
    pub monthly_revenue: BigDecimal,
    /// Orders created in the last seven days, any status.
    pub new_orders_this_week: usize,
    pub active_products: usize,
    pub average_rating: Option<f64>,
    /// Delivered sales of the last seven days, oldest day first.
    pub sales_last_week: Vec<SalesPoint>,
    pub recent_orders: Vec<Order>,
}

impl Dashboard {
    /// One decimal, or `N/A` when the producer has no ratings.
    pub fn average_rating_label(&self) -> String {
        match self.average_rating {
            Some(rating) => format!("{rating:.1}"),
            None => "N/A".to_string(),
        }
    }
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Dom",
        Weekday::Mon => "Seg",
        Weekday::Tue => "Ter",
        Weekday::Wed => "Qua",
        Weekday::Thu => "Qui",
        Weekday::Fri => "Sex",
        Weekday::Sat => "Sáb",
    }
}

pub fn build_dashboard(
    orders: &[Order],
    products: &[ProducerProduct],
    profile: &ProducerProfile,
    now: DateTime<Utc>,
) -> Dashboard {
    let start_of_month = now
        .date_naive()
        .with_day(1)
        .unwrap_or_else(|| now.date_naive())
        .and_time(NaiveTime::MIN)
        .and_utc();
    let start_of_week = now - Duration::days(CHART_DAYS);

    let delivered = |order: &&Order| order.status == OrderStatus::Entregue;

    let monthly: Vec<BigDecimal> = orders
        .iter()
        .filter(delivered)
        .filter(|order| order.created_at >= start_of_month)
        .map(|order| order.total_price.clone())
        .collect();

    let new_orders_this_week = orders
        .iter()
        .filter(|order| order.created_at >= start_of_week)
        .count();

    let active_products = products
        .iter()
        .filter(|product| product.status == ProductStatus::Ativo)
        .count();

    let average_rating = (profile.average_rating > 0.0).then_some(profile.average_rating);

    let mut sales_last_week: Vec<SalesPoint> = (0..CHART_DAYS)
        .rev()
        .map(|days_ago| SalesPoint {
            label: weekday_label((now - Duration::days(days_ago)).weekday()),
            total: BigDecimal::from(0),
        })
        .collect();

    // Buckets are keyed by weekday, so an order from exactly seven days ago
    // lands on today's bar.
    for order in orders
        .iter()
        .filter(delivered)
        .filter(|order| order.created_at >= start_of_week)
    {
        let label = weekday_label(order.created_at.weekday());
        if let Some(point) = sales_last_week.iter_mut().find(|p| p.label == label) {
            point.total = &point.total + &order.total_price;
        }
    }

    let mut recent_orders = orders.to_vec();
    recent_orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent_orders.truncate(RECENT_ORDERS);

    Dashboard {
        monthly_revenue: money::sum(&monthly),
        new_orders_this_week,
        active_products,
        average_rating,
        sales_last_week,
        recent_orders,
    }
}
