mod genome;
