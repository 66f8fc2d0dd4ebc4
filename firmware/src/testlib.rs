use crate::system::inputs::Inputs;

pub const MS: u32 = 480_000_000 / 1000;

pub fn sample_until_button_is_clicked(inputs: &mut Inputs) {
    loop {
        inputs.sample();
        if inputs.button.clicked {
            break;
        }
        cortex_m::asm::delay(MS);
    }
}
