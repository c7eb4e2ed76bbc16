mod orientation_laws;
