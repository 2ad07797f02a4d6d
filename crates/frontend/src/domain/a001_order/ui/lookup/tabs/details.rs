//! Details tab: the markup rendering of an order

use crate::domain::a001_order::display::{InfoSection, ItemsTable, OrderDisplay};
use crate::domain::a001_order::status::ItemStatus;
use leptos::prelude::*;
use thaw::*;

fn status_badge_color(status: ItemStatus) -> BadgeColor {
    match status {
        ItemStatus::Completed => BadgeColor::Success,
        ItemStatus::Processing => BadgeColor::Warning,
        ItemStatus::Cancelled => BadgeColor::Danger,
        ItemStatus::Unknown => BadgeColor::Informative,
    }
}

#[component]
fn InfoGrid(section: InfoSection) -> impl IntoView {
    view! {
        <Card>
            <h4 class="details-section__title">{section.title}</h4>
            <div class="info-grid">
                {section
                    .fields
                    .into_iter()
                    .map(|field| {
                        view! {
                            <div class="info-item">
                                <div class="info-label">{field.label}</div>
                                <div class="info-value">{field.value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn ItemsCard(items: ItemsTable) -> impl IntoView {
    view! {
        <Card>
            <h4 class="details-section__title">{items.title}</h4>
            <div style="overflow-x: auto;">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {items
                                .columns
                                .into_iter()
                                .map(|column| view! { <TableHeaderCell>{column}</TableHeaderCell> })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {items
                            .rows
                            .into_iter()
                            .map(|row| {
                                let color = status_badge_color(row.status);
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout truncate=true><strong>{row.name}</strong></TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.brand}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.price}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.sale}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout><span class="amount">{row.total}</span></TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge appearance=BadgeAppearance::Tint color=color>
                                                    {row.status.label()}
                                                </Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
        </Card>
    }
}

#[component]
pub fn DetailsTab(display: OrderDisplay) -> impl IntoView {
    let OrderDisplay {
        delivery,
        payment,
        items,
        details,
        ..
    } = display;

    view! {
        <div class="detail-grid">
            <div class="detail-grid__col">
                <InfoGrid section=delivery />
                <InfoGrid section=payment />
            </div>
            <div class="detail-grid__col">
                <InfoGrid section=details />
            </div>
        </div>
        <ItemsCard items=items />
    }
}
