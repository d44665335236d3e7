//! Model formats understood by the converter

use std::fmt;

/// On-disk representation of a model.
///
/// The `key` of a format is the value the converter expects for
/// `--input_format` / `--output_format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    KerasHdf5,
    KerasSavedModel,
    TfSavedModel,
    TfHub,
    TfjsLayersModel,
    TfjsGraphModel,
}

impl Format {
    /// Formats offered for the input model, in display order.
    pub const INPUTS: [Format; 5] = [
        Format::KerasHdf5,
        Format::KerasSavedModel,
        Format::TfSavedModel,
        Format::TfHub,
        Format::TfjsLayersModel,
    ];

    /// Converter key for this format
    pub fn key(self) -> &'static str {
        match self {
            Format::KerasHdf5 => "keras",
            Format::KerasSavedModel => "keras_saved_model",
            Format::TfSavedModel => "tf_saved_model",
            Format::TfHub => "tf_hub",
            Format::TfjsLayersModel => "tfjs_layers_model",
            Format::TfjsGraphModel => "tfjs_graph_model",
        }
    }

    /// Human-readable name shown in choice lists
    pub fn display_name(self) -> &'static str {
        match self {
            Format::KerasHdf5 => "Keras (HDF5)",
            Format::KerasSavedModel => "Tensorflow Keras Saved Model",
            Format::TfSavedModel => "Tensorflow Saved Model",
            Format::TfHub => "TFHub Module",
            Format::TfjsLayersModel => "TensorFlow.js Layers Model",
            Format::TfjsGraphModel => "TensorFlow.js Graph Model",
        }
    }

    /// Whether the model is a saved model with tags and signatures to pick from.
    pub fn is_saved_model(self) -> bool {
        matches!(self, Format::TfSavedModel | Format::KerasSavedModel)
    }

    /// Output formats the converter can produce from this input format.
    ///
    /// Empty when the output format is fixed by the converter.
    pub fn output_formats(self) -> &'static [Format] {
        match self {
            Format::KerasSavedModel => &[Format::TfjsGraphModel, Format::TfjsLayersModel],
            Format::TfjsLayersModel => &[Format::KerasHdf5, Format::TfjsLayersModel],
            Format::KerasHdf5 | Format::TfSavedModel | Format::TfHub | Format::TfjsGraphModel => {
                &[]
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_model_variants() {
        assert!(Format::TfSavedModel.is_saved_model());
        assert!(Format::KerasSavedModel.is_saved_model());
        assert!(!Format::TfHub.is_saved_model());
        assert!(!Format::TfjsLayersModel.is_saved_model());
    }

    #[test]
    fn test_output_formats_for_layers_model() {
        assert_eq!(
            Format::TfjsLayersModel.output_formats(),
            &[Format::KerasHdf5, Format::TfjsLayersModel]
        );
    }

    #[test]
    fn test_output_formats_for_keras_saved_model() {
        assert_eq!(
            Format::KerasSavedModel.output_formats(),
            &[Format::TfjsGraphModel, Format::TfjsLayersModel]
        );
    }

    #[test]
    fn test_output_formats_fixed_by_converter() {
        assert!(Format::TfSavedModel.output_formats().is_empty());
        assert!(Format::TfHub.output_formats().is_empty());
        assert!(Format::KerasHdf5.output_formats().is_empty());
    }

    #[test]
    fn test_display_uses_converter_key() {
        assert_eq!(Format::KerasHdf5.to_string(), "keras");
        assert_eq!(Format::TfjsGraphModel.to_string(), "tfjs_graph_model");
    }
}
