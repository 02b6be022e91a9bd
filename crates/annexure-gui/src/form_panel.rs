//! Input widgets for every field of the shipment form

use annexure_app::FormSession;
use annexure_domain::model::ContainerSize;
use eframe::egui::{self, RichText, Ui};
use egui_extras::DatePickerButton;

/// Draw the whole form: count, shipping bill, container rows, weights
pub fn show(ui: &mut Ui, session: &mut FormSession) {
    ui.heading("📝 Vehicle Load Entry Form");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("How many containers?");
        let mut count = session.container_count();
        let response = ui.add(egui::DragValue::new(&mut count).speed(1).range(1..=usize::MAX));
        if response.changed() {
            session.set_container_count(count);
        }
    });
    ui.add_space(8.0);

    egui::Grid::new("shipping_bill")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Shipping Bill Number");
            ui.add(egui::TextEdit::singleline(&mut session.shipping_bill_no).hint_text("SB123456"));
            ui.end_row();

            ui.label("Shipping Bill Date");
            ui.add(DatePickerButton::new(&mut session.shipping_bill_date).id_salt("shipping_bill_date"));
            ui.end_row();
        });

    for (i, row) in session.containers_mut().iter_mut().enumerate() {
        let n = i + 1;
        ui.add_space(10.0);
        ui.label(RichText::new(format!("Container {} Details:", n)).strong());

        egui::Grid::new(("container", i))
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(format!("Container Number {}", n));
                ui.text_edit_singleline(&mut row.number);
                ui.end_row();

                ui.label(format!("Container Size {}", n));
                egui::ComboBox::from_id_salt(("container_size", i))
                    .selected_text(row.size.label())
                    .show_ui(ui, |ui| {
                        for size in ContainerSize::ALL {
                            ui.selectable_value(&mut row.size, size, size.label());
                        }
                    });
                ui.end_row();

                ui.label(format!("Seal Number {}", n));
                ui.text_edit_singleline(&mut row.seal_number);
                ui.end_row();

                ui.label(format!("Date of Sealing {}", n));
                let salt = format!("sealing_date_{}", i);
                ui.add(DatePickerButton::new(&mut row.sealing_date).id_salt(&salt));
                ui.end_row();
            });
    }

    ui.add_space(10.0);
    egui::Grid::new("weights")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Gross Weight (in kg)");
            ui.add(weight_input(&mut session.gross_weight_kg));
            ui.end_row();

            ui.label("Net Weight (in kg)");
            ui.add(weight_input(&mut session.net_weight_kg));
            ui.end_row();

            ui.label("Package Type (e.g. Boxes, Cartons, Bags)");
            ui.text_edit_singleline(&mut session.package_type);
            ui.end_row();
        });
}

fn weight_input(value: &mut f64) -> egui::DragValue<'_> {
    egui::DragValue::new(value)
        .speed(0.1)
        .range(0.0..=f64::MAX)
        .fixed_decimals(2)
}
