use contracts::domain::a004_payment_type::TariffTable;
use leptos::prelude::*;
use thaw::*;

use crate::shared::number_format::format_money;

/// Read-only tariff cards (name, swatch, amount) for the default catalogue.
#[component]
pub fn TariffReference() -> impl IntoView {
    let table = TariffTable::default();

    view! {
        <div class="card-grid card-grid--compact">
            {table
                .entries()
                .to_vec()
                .into_iter()
                .map(|t| {
                    let swatch = format!("background-color: {}", t.color);
                    view! {
                        <div class="tariff-card">
                            <Card>
                                <div class="tariff-card__header">
                                    <span class="tariff-card__swatch" style=swatch></span>
                                    <h4>{t.name}</h4>
                                </div>
                                <div class="tariff-card__amount">{format_money(t.amount)}</div>
                            </Card>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
